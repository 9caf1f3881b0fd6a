//! Solve result representation.

use crate::grid::Grid;
use crate::solver::Algorithm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a tiling solve.
///
/// Feasibility is always decided: `feasible == false` means the instance
/// provably has no tiling, not that the solver gave up.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Whether the pieces tile the board exactly.
    pub feasible: bool,

    /// One witness tiling, keyed to 1-based input-order piece indices.
    /// Present exactly when `feasible` is true.
    pub grid: Option<Grid>,

    /// Search steps taken (placements tried, rows covered, or constraints
    /// built, depending on the algorithm).
    pub steps: u64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
}

impl PackResult {
    /// Creates a negative result.
    pub fn infeasible(algorithm: Algorithm) -> Self {
        Self {
            feasible: false,
            grid: None,
            steps: 0,
            computation_time_ms: 0,
            algorithm,
        }
    }

    /// Creates a positive result carrying the witness tiling.
    pub fn solved(algorithm: Algorithm, grid: Grid) -> Self {
        Self {
            feasible: true,
            grid: Some(grid),
            steps: 0,
            computation_time_ms: 0,
            algorithm,
        }
    }

    /// Sets the step counter.
    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }
}
