//! # Tessera Core
//!
//! Core types for the tessera exact rectangle tiling engine.
//!
//! This crate provides the foundational types shared by the decision
//! engines in `tessera-rect`: pieces, boards, the occupancy grid, solver
//! configuration, results, and errors.
//!
//! ## Core Components
//!
//! - [`Piece`] / [`Board`]: the problem instance, a multiset of integer
//!   rectangles and the H×W board they must tile exactly
//! - [`Grid`]: the occupancy matrix engines mutate and results carry
//! - [`Config`] / [`Algorithm`]: solver selection and options
//! - [`PackResult`]: feasibility verdict plus the witness tiling
//! - [`Error`] / [`Result`]: input and backend failures
//!
//! ## Decision Algorithms
//!
//! The [`Algorithm`] enum selects one of three exhaustive engines:
//!
//! | Algorithm | Approach | Notes |
//! |-----------|----------|-------|
//! | `Backtracking` | Top-left first-fit search | Default; in-place grid with undo |
//! | `DancingLinks` | Algorithm X on an exact-cover matrix | MRV column selection |
//! | `IntegerProgramming` | MIP feasibility model | Requires the `milp` feature of `tessera-rect` |
//!
//! All three agree on feasibility for every instance; they may return
//! different witness tilings.
//!
//! ## Configuration
//!
//! ```rust
//! use tessera_core::{Algorithm, Config};
//!
//! let config = Config::new()
//!     .with_algorithm(Algorithm::DancingLinks)
//!     .with_rotation(true);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod board;
pub mod error;
pub mod grid;
pub mod piece;
pub mod result;
pub mod solver;

// Re-exports
pub use board::Board;
pub use error::{Error, Result};
pub use grid::{verify_tiling, Grid};
pub use piece::{total_area, Piece};
pub use result::PackResult;
pub use solver::{Algorithm, Config, ProgressCallback, ProgressInfo};
