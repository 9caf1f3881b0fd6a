//! Error types shared across the workspace.

use thiserror::Error;

/// Errors surfaced by the tiling engines.
///
/// Infeasibility is never an error: a solve that proves no tiling exists
/// returns a [`PackResult`](crate::PackResult) with `feasible == false`.
/// These variants cover invalid inputs, a missing solver backend, and
/// internal bugs, so callers can distinguish "no packing" from "could not
/// decide".
#[derive(Debug, Error)]
pub enum Error {
    /// Board dimensions outside the valid domain.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Piece dimensions outside the valid domain.
    #[error("invalid piece: {0}")]
    InvalidPiece(String),

    /// The MIP backend is not compiled in or failed to run.
    #[error("MIP backend unavailable: {0}")]
    SolverUnavailable(String),

    /// An engine corrupted or failed to restore its own state.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
