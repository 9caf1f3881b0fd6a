//! Rectangular pieces.

use std::fmt;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular piece with integer sides.
///
/// A piece is identified by its 1-based position in the input list handed
/// to the solver; the struct itself carries only the dimensions. Witness
/// grids are keyed to that input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    /// Height in rows.
    pub h: usize,
    /// Width in columns.
    pub w: usize,
}

impl Piece {
    /// Creates a new piece of `h` rows by `w` columns.
    pub fn new(h: usize, w: usize) -> Self {
        Self { h, w }
    }

    /// Returns the number of cells the piece covers.
    pub fn area(&self) -> usize {
        self.h * self.w
    }

    /// Returns the piece rotated by 90 degrees.
    pub fn rotated(&self) -> Self {
        Self {
            h: self.w,
            w: self.h,
        }
    }

    /// Returns true if rotating the piece leaves it unchanged.
    pub fn is_square(&self) -> bool {
        self.h == self.w
    }

    /// Returns true if the piece fits a `rows` × `cols` board as-is.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        self.h <= rows && self.w <= cols
    }

    /// Returns true if the piece fits a `rows` × `cols` board in at least
    /// one of its two orientations.
    pub fn fits_either_way(&self, rows: usize, cols: usize) -> bool {
        self.h.max(self.w) <= rows.max(cols) && self.h.min(self.w) <= rows.min(cols)
    }

    /// Validates the piece and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.h == 0 || self.w == 0 {
            return Err(Error::InvalidPiece(format!(
                "piece sides must be at least 1, got {}x{}",
                self.h, self.w
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.h, self.w)
    }
}

/// Total area of a list of pieces.
pub fn total_area(pieces: &[Piece]) -> usize {
    pieces.iter().map(Piece::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_basics() {
        let piece = Piece::new(3, 5);
        assert_eq!(piece.area(), 15);
        assert_eq!(piece.rotated(), Piece::new(5, 3));
        assert!(!piece.is_square());
        assert!(Piece::new(2, 2).is_square());
        assert_eq!(format!("{}", piece), "3x5");
    }

    #[test]
    fn test_piece_fit() {
        let piece = Piece::new(5, 2);
        assert!(piece.fits(5, 2));
        assert!(!piece.fits(2, 5));
        assert!(piece.fits_either_way(2, 5));
        assert!(!Piece::new(6, 1).fits_either_way(2, 5));
    }

    #[test]
    fn test_piece_validation() {
        assert!(Piece::new(1, 1).validate().is_ok());
        assert!(Piece::new(0, 3).validate().is_err());
        assert!(Piece::new(3, 0).validate().is_err());
    }

    #[test]
    fn test_total_area() {
        let pieces = vec![Piece::new(1, 6), Piece::new(2, 2), Piece::new(3, 2)];
        assert_eq!(total_area(&pieces), 16);
        assert_eq!(total_area(&[]), 0);
    }
}
