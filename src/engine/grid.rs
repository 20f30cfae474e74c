//! Fixed-size binary cell grid.
//!
//! The grid is the single shared mutable resource of the engine. It is
//! owned by the controller; the rule and the interaction surface only ever
//! borrow it for the duration of a call.

/// Grid indexing errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) outside {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
    #[error("cell state {state} is not 0 or 1")]
    InvalidState { state: u8 },
}

/// Rectangular grid of binary cell states.
///
/// Data is stored as a flat array with indexing: `y * cols + x`.
/// Every element is 0 (dead) or 1 (alive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl CellGrid {
    /// Create an all-dead grid.
    ///
    /// Dimensions are validated by [`GameConfig::validate`] before
    /// construction; a zero dimension here is a caller bug.
    ///
    /// [`GameConfig::validate`]: crate::schema::GameConfig::validate
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        Self {
            rows,
            cols,
            cells: vec![0u8; rows * cols],
        }
    }

    /// Grid height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw cell slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Convert (x, y) coordinates to flat index.
    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.cols || y >= self.rows {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Get the cell state at (x, y).
    ///
    /// Out-of-range coordinates are an error, never clamped or wrapped;
    /// wrapping is a rule concept, not an indexing fallback.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.idx(x, y)])
    }

    /// Set the cell state at (x, y) in place.
    ///
    /// `state` must be 0 or 1; anything else is rejected before the grid
    /// is touched, like an out-of-range coordinate.
    pub fn set(&mut self, x: usize, y: usize, state: u8) -> Result<(), GridError> {
        if state > 1 {
            return Err(GridError::InvalidState { state });
        }
        self.check_bounds(x, y)?;
        let idx = self.idx(x, y);
        self.cells[idx] = state;
        Ok(())
    }

    /// Internal accessor for rule and controller loops that iterate the
    /// grid's own coordinate range.
    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.cols + x]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, state: u8) {
        let idx = self.idx(x, y);
        self.cells[idx] = state;
    }

    /// Set every cell to 0, preserving dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of live cells.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}
