//! Tiling façade: validation, pre-checks, and engine dispatch.

use std::time::Instant;

use tessera_core::{
    total_area, Algorithm, Board, Config, PackResult, Piece, ProgressCallback, ProgressInfo,
    Result,
};

use crate::backtracking::run_backtracking;
use crate::exact_cover::run_dancing_links;
use crate::milp::run_milp;

/// How many engine steps pass between progress reports.
const PROGRESS_INTERVAL: u64 = 1024;

/// Counts engine steps and emits coarse progress reports.
pub(crate) struct Ticker<'a> {
    callback: Option<&'a ProgressCallback>,
    total_items: usize,
    steps: u64,
}

impl<'a> Ticker<'a> {
    pub(crate) fn new(callback: Option<&'a ProgressCallback>, total_items: usize) -> Self {
        Self {
            callback,
            total_items,
            steps: 0,
        }
    }

    pub(crate) fn step(&mut self, items_placed: usize) {
        self.steps += 1;
        if self.steps % PROGRESS_INTERVAL == 0 {
            if let Some(cb) = self.callback {
                cb(ProgressInfo {
                    steps: self.steps,
                    items_placed,
                    total_items: self.total_items,
                });
            }
        }
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }
}

/// Decides perfect rectangle tilings.
///
/// The packer validates its input, rejects instances that fail the cheap
/// area and fit checks, and dispatches to the engine selected by
/// [`Config::algorithm`]. Engines never call each other, and every engine
/// returns the same verdict for the same instance.
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Decides whether `pieces` tile `board` exactly.
    ///
    /// Returns a witness grid keyed to 1-based input-order piece indices
    /// when feasible. Infeasibility is returned as data; errors are
    /// reserved for invalid input, a missing MIP backend, and internal
    /// faults.
    pub fn pack(&self, board: &Board, pieces: &[Piece]) -> Result<PackResult> {
        self.pack_impl(board, pieces, None)
    }

    /// Same as [`Self::pack`], reporting progress through `callback`.
    pub fn pack_with_progress(
        &self,
        board: &Board,
        pieces: &[Piece],
        callback: ProgressCallback,
    ) -> Result<PackResult> {
        self.pack_impl(board, pieces, Some(&callback))
    }

    fn pack_impl(
        &self,
        board: &Board,
        pieces: &[Piece],
        progress: Option<&ProgressCallback>,
    ) -> Result<PackResult> {
        board.validate()?;
        for piece in pieces {
            piece.validate()?;
        }

        let start = Instant::now();

        if let Some(cb) = progress {
            cb(ProgressInfo {
                steps: 0,
                items_placed: 0,
                total_items: pieces.len(),
            });
        }

        let mut result = if self.reject_early(board, pieces) {
            PackResult::infeasible(self.config.algorithm)
        } else {
            match self.config.algorithm {
                Algorithm::Backtracking => {
                    run_backtracking(board, pieces, self.config.allow_rotation, progress)?
                }
                Algorithm::DancingLinks => {
                    run_dancing_links(board, pieces, self.config.allow_rotation, progress)?
                }
                Algorithm::IntegerProgramming => run_milp(
                    board,
                    pieces,
                    self.config.allow_rotation,
                    self.config.use_symmetry_breaking,
                    progress,
                )?,
            }
        };
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        if let Some(cb) = progress {
            cb(ProgressInfo {
                steps: result.steps,
                items_placed: if result.feasible { pieces.len() } else { 0 },
                total_items: pieces.len(),
            });
        }

        Ok(result)
    }

    /// Cheap necessary conditions. A rejection proves infeasibility; a pass
    /// proves nothing.
    fn reject_early(&self, board: &Board, pieces: &[Piece]) -> bool {
        let pieces_area = total_area(pieces);
        if pieces_area != board.area() {
            log::debug!(
                "rejecting: total piece area {} differs from board area {}",
                pieces_area,
                board.area()
            );
            return true;
        }

        for (i, piece) in pieces.iter().enumerate() {
            let fits = if self.config.allow_rotation {
                piece.fits_either_way(board.rows(), board.cols())
            } else {
                piece.fits(board.rows(), board.cols())
            };
            if !fits {
                log::debug!(
                    "rejecting: piece {} ({piece}) cannot fit a {}x{} board",
                    i + 1,
                    board.rows(),
                    board.cols()
                );
                return true;
            }
        }

        false
    }
}
