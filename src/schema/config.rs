//! Configuration types for the Life engine.

use serde::{Deserialize, Serialize};

/// Default frame interval in milliseconds.
fn default_frame_interval_ms() -> u64 {
    100
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Minimum elapsed time between two generation advances while playing.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl GameConfig {
    /// Total cell count (`rows * cols`).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    ///
    /// A failed validation is fatal at construction time; the controller
    /// never partially initializes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("Frame interval must be positive")]
    InvalidFrameInterval,
}
