//! The rectangular board to be tiled.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The H×W board the pieces must tile exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board of `rows` × `cols` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of rows (H).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (W).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Validates the board and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidBoard(format!(
                "board dimensions must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_basics() {
        let board = Board::new(6, 7);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.area(), 42);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_board_validation() {
        assert!(Board::new(0, 5).validate().is_err());
        assert!(Board::new(5, 0).validate().is_err());
        assert!(Board::new(1, 1).validate().is_ok());
    }
}
