//! Schema module - Configuration and pattern interchange types.

mod config;
mod pattern;
mod presets;

pub use config::*;
pub use pattern::*;
pub use presets::*;
