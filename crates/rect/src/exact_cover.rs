//! Exact-cover reduction and Algorithm X engine.
//!
//! A tiling is an exact cover: the matrix has one column per board cell and
//! one column per piece, and one row per candidate placement (piece,
//! orientation, anchor). Selecting a set of rows that covers every column
//! exactly once places every piece exactly once and fills every cell
//! exactly once.
//!
//! The matrix is stored as a dictionary from column to its surviving row
//! set, alongside an immutable row → column list. Covering a row removes
//! every column it touches together with all conflicting rows; uncovering
//! replays the removals in reverse, restoring the dictionary exactly. The
//! search picks the column with the fewest surviving rows first
//! (minimum-remaining-values), ties broken by the smallest column index.

use std::collections::{HashMap, HashSet};

use tessera_core::{Algorithm, Board, Grid, PackResult, Piece, ProgressCallback, Result};

use crate::packer::Ticker;

/// The placement behind one matrix row, kept for witness reconstruction.
#[derive(Debug, Clone, Copy)]
struct RowInfo {
    /// 1-based input-order piece index.
    piece: usize,
    row: usize,
    col: usize,
    h: usize,
    w: usize,
}

struct CoverMatrix {
    /// Surviving rows per column. Columns `0..cells` are board cells in
    /// row-major order; column `cells + i` is piece `i`.
    cols: HashMap<usize, HashSet<usize>>,
    /// Columns per row, in construction order. Immutable after build.
    rows: Vec<Vec<usize>>,
    lookup: Vec<RowInfo>,
}

/// Removed column contents, replayed by [`CoverMatrix::uncover`].
type Removed = Vec<(usize, HashSet<usize>)>;

impl CoverMatrix {
    fn build(board: &Board, pieces: &[Piece], allow_rotation: bool) -> Self {
        let cells = board.area();
        let mut cols: HashMap<usize, HashSet<usize>> = (0..cells + pieces.len())
            .map(|c| (c, HashSet::new()))
            .collect();
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut lookup: Vec<RowInfo> = Vec::new();

        for (i, piece) in pieces.iter().enumerate() {
            let mut orientations = vec![*piece];
            if allow_rotation && !piece.is_square() {
                orientations.push(piece.rotated());
            }
            for o in orientations {
                if o.h > board.rows() || o.w > board.cols() {
                    continue;
                }
                for r in 0..=board.rows() - o.h {
                    for c in 0..=board.cols() - o.w {
                        let id = rows.len();
                        let mut covered: Vec<usize> = Vec::with_capacity(o.area() + 1);
                        for rr in r..r + o.h {
                            for cc in c..c + o.w {
                                covered.push(rr * board.cols() + cc);
                            }
                        }
                        covered.push(cells + i);
                        for &col in &covered {
                            if let Some(set) = cols.get_mut(&col) {
                                set.insert(id);
                            }
                        }
                        rows.push(covered);
                        lookup.push(RowInfo {
                            piece: i + 1,
                            row: r,
                            col: c,
                            h: o.h,
                            w: o.w,
                        });
                    }
                }
            }
        }

        Self { cols, rows, lookup }
    }

    /// Picks the most constrained surviving column, ties broken by index.
    fn choose_column(&self) -> Option<usize> {
        self.cols
            .iter()
            .map(|(&col, members)| (members.len(), col))
            .min()
            .map(|(_, col)| col)
    }

    /// Removes every column `row` touches, plus all rows conflicting with
    /// it, returning the removed sets in column order for [`Self::uncover`].
    fn cover(&mut self, row: usize) -> Removed {
        let mut removed = Removed::with_capacity(self.rows[row].len());
        for idx in 0..self.rows[row].len() {
            let col = self.rows[row][idx];
            let members = self.cols.remove(&col).unwrap_or_default();
            for &other in &members {
                for &col2 in &self.rows[other] {
                    if col2 != col {
                        if let Some(set) = self.cols.get_mut(&col2) {
                            set.remove(&other);
                        }
                    }
                }
            }
            removed.push((col, members));
        }
        removed
    }

    /// Exactly inverts [`Self::cover`], restoring the column dictionary.
    fn uncover(&mut self, removed: Removed) {
        for (col, members) in removed.into_iter().rev() {
            for &other in &members {
                for &col2 in &self.rows[other] {
                    if col2 != col {
                        if let Some(set) = self.cols.get_mut(&col2) {
                            set.insert(other);
                        }
                    }
                }
            }
            self.cols.insert(col, members);
        }
    }

    fn search(&mut self, solution: &mut Vec<usize>, ticker: &mut Ticker<'_>) -> bool {
        let Some(col) = self.choose_column() else {
            return true;
        };
        let mut candidates: Vec<usize> = self.cols[&col].iter().copied().collect();
        candidates.sort_unstable();

        for row in candidates {
            solution.push(row);
            ticker.step(solution.len());
            let removed = self.cover(row);
            if self.search(solution, ticker) {
                return true;
            }
            self.uncover(removed);
            solution.pop();
        }
        false
    }
}

/// Runs the Algorithm X engine.
///
/// Assumes the façade's area and fit pre-checks have passed; call through
/// [`Packer`](crate::Packer) unless the input is known to satisfy them.
pub fn run_dancing_links(
    board: &Board,
    pieces: &[Piece],
    allow_rotation: bool,
    progress: Option<&ProgressCallback>,
) -> Result<PackResult> {
    let mut matrix = CoverMatrix::build(board, pieces, allow_rotation);
    let mut solution = Vec::with_capacity(pieces.len());
    let mut ticker = Ticker::new(progress, pieces.len());

    if !matrix.search(&mut solution, &mut ticker) {
        return Ok(PackResult::infeasible(Algorithm::DancingLinks).with_steps(ticker.steps()));
    }

    let mut witness = Grid::new(board.rows(), board.cols());
    for &row in &solution {
        let info = matrix.lookup[row];
        witness.fill_rect(info.row, info.col, info.h, info.w, info.piece);
    }
    Ok(PackResult::solved(Algorithm::DancingLinks, witness).with_steps(ticker.steps()))
}
