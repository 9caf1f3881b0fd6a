//! Solver selection, configuration, and progress reporting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decision algorithm.
///
/// Every variant decides the same question exhaustively; the choice only
/// affects how the search is carried out and which witness is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Top-left first-fit backtracking.
    #[default]
    Backtracking,
    /// Algorithm X over the exact-cover reduction.
    DancingLinks,
    /// Mixed-integer feasibility model.
    IntegerProgramming,
}

/// Solver configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Decision algorithm to dispatch to.
    pub algorithm: Algorithm,

    /// Whether pieces may be rotated by 90 degrees.
    pub allow_rotation: bool,

    /// Whether the MIP model orders identical pieces to prune permutations.
    pub use_symmetry_breaking: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            allow_rotation: false,
            use_symmetry_breaking: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decision algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Allows or forbids 90-degree rotation of pieces.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Enables or disables identical-piece ordering in the MIP model.
    pub fn with_symmetry_breaking(mut self, enable: bool) -> Self {
        self.use_symmetry_breaking = enable;
        self
    }
}

/// Progress callback for long-running solves.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during a solve.
///
/// Purely advisory: engines emit it at a coarse interval and consumers may
/// ignore it entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressInfo {
    /// Monotonically increasing count of search steps taken.
    pub steps: u64,
    /// Pieces placed at the time of the report.
    pub items_placed: usize,
    /// Total pieces to place.
    pub total_items: usize,
}
