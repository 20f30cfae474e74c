//! Rectangular 0/1 pattern matrices.
//!
//! Patterns are the interchange format for presets, saved grids and
//! pattern loading: an ordered sequence of rows, each an ordered sequence
//! of 0/1 values, with a constant row length.

use serde::{Deserialize, Serialize};

/// Pattern shape and placement errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern has no rows or no columns")]
    EmptyPattern,
    #[error("Pattern rows have non-uniform lengths (row {row} has {len}, expected {expected})")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Pattern row contains value {value}, expected 0 or 1")]
    InvalidCellValue { value: u8 },
    #[error("Pattern is {rows}x{cols} but the grid is only {grid_rows}x{grid_cols}")]
    TooLarge {
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },
}

/// Rectangular matrix of 0/1 cell states.
///
/// Serializes as a plain JSON array of rows, e.g. `[[0,1,0],[1,1,1]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Pattern {
    rows: Vec<Vec<u8>>,
}

impl Pattern {
    /// Build a pattern, rejecting empty, ragged or non-binary input.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, PatternError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        let expected = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(PatternError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            if let Some(&value) = row.iter().find(|&&v| v > 1) {
                return Err(PatternError::InvalidCellValue { value });
            }
        }
        Ok(Self { rows })
    }

    /// Pattern height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Pattern width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Cell value at (x, y). Panics outside the pattern; callers iterate
    /// the pattern's own dimensions.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.rows[y][x]
    }

    /// Row-major view of the matrix.
    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of live cells in the pattern.
    pub fn live_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&v| v == 1).count())
            .sum()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Pattern {
    type Error = PatternError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Pattern::new(rows)
    }
}

impl From<Pattern> for Vec<Vec<u8>> {
    fn from(pattern: Pattern) -> Self {
        pattern.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_pattern() {
        let pattern = Pattern::new(vec![vec![0, 1, 0], vec![1, 1, 1]]).unwrap();
        assert_eq!(pattern.rows(), 2);
        assert_eq!(pattern.cols(), 3);
        assert_eq!(pattern.at(1, 0), 1);
        assert_eq!(pattern.live_cells(), 4);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Pattern::new(vec![]), Err(PatternError::EmptyPattern));
        assert_eq!(Pattern::new(vec![vec![]]), Err(PatternError::EmptyPattern));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = Pattern::new(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            PatternError::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_non_binary_rejected() {
        let err = Pattern::new(vec![vec![0, 2]]).unwrap_err();
        assert_eq!(err, PatternError::InvalidCellValue { value: 2 });
    }

    #[test]
    fn test_json_roundtrip() {
        let pattern = Pattern::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "[[0,1],[1,0]]");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn test_json_deserialize_validates() {
        assert!(serde_json::from_str::<Pattern>("[[0,1],[1]]").is_err());
        assert!(serde_json::from_str::<Pattern>("[[0,7]]").is_err());
        assert!(serde_json::from_str::<Pattern>("[]").is_err());
    }

    proptest! {
        #[test]
        fn prop_serde_roundtrip_is_identity(
            rows in 1usize..12,
            cols in 1usize..12,
            seed in any::<u64>(),
        ) {
            // Deterministic pseudo-random fill from the seed.
            let mut state = seed | 1;
            let matrix: Vec<Vec<u8>> = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| {
                            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                            ((state >> 32) & 1) as u8
                        })
                        .collect()
                })
                .collect();

            let pattern = Pattern::new(matrix).unwrap();
            let json = serde_json::to_string(&pattern).unwrap();
            let back: Pattern = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, pattern);
        }
    }
}
