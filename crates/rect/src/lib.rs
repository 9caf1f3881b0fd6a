//! # Tessera Rect
//!
//! Exact decision engines for perfect rectangle tiling.
//!
//! Given an H×W board and a multiset of integer-sided rectangles, the
//! [`Packer`] decides whether the rectangles tile the board exactly (no
//! overlap, no gap, no piece outside) and returns one witness tiling when
//! they do. Pieces may optionally be rotated by 90 degrees.
//!
//! Three exhaustive engines share the contract and always agree on
//! feasibility:
//!
//! - [`backtracking`]: top-left first-fit search on an occupancy grid
//! - [`exact_cover`]: Algorithm X over an exact-cover reduction
//! - [`milp`]: mixed-integer feasibility model (HiGHS, `milp` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_rect::{Algorithm, Board, Config, Packer, Piece};
//!
//! let board = Board::new(2, 2);
//! let pieces = vec![Piece::new(1, 2), Piece::new(1, 2)];
//!
//! let packer = Packer::new(Config::new().with_algorithm(Algorithm::Backtracking));
//! let result = packer.pack(&board, &pieces).unwrap();
//!
//! assert!(result.feasible);
//! let grid = result.grid.unwrap();
//! assert_eq!(grid.cell(0, 0), grid.cell(0, 1));
//! ```
//!
//! ## Feature Flags
//!
//! - `milp` (default): compile the MIP engine and its HiGHS backend.
//!   Without it, `Algorithm::IntegerProgramming` fails with
//!   [`Error::SolverUnavailable`].
//! - `serde`: serialization support for the core types.

pub mod backtracking;
pub mod exact_cover;
pub mod milp;
pub mod packer;

// Re-exports
pub use milp::is_milp_available;
pub use packer::Packer;
pub use tessera_core::{
    total_area, verify_tiling, Algorithm, Board, Config, Error, Grid, PackResult, Piece,
    ProgressCallback, ProgressInfo, Result,
};
