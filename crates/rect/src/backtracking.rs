//! Top-left first-fit backtracking engine.
//!
//! The search keeps one owned occupancy grid and undoes placements in
//! place: every pop erases exactly what the matching push painted. At each
//! step the pivot is the first empty cell in row-major order, and the next
//! piece must cover it with its top-left corner. Candidates are tried in
//! descending-width order, which keeps wide pieces out of narrow leftover
//! strips early.
//!
//! # Rotation
//!
//! With rotation enabled the candidate list holds each non-square piece
//! twice, once per orientation, laid out as
//! `[upright rectangles ; squares ; rotated rectangles in reverse order]`
//! so that the two orientations of one physical piece sit at mirrored
//! indices. Placing one orientation forbids the other until the placement
//! is undone. On square boards the first placed piece is additionally
//! restricted to the upright block: transposing a tiling of a square board
//! swaps every orientation, so one of the two mirror tilings always starts
//! with an upright piece. Oblong boards carry no such symmetry and get no
//! first-move restriction.

use tessera_core::{Algorithm, Board, Error, Grid, PackResult, Piece, ProgressCallback, Result};

use crate::packer::Ticker;

/// A piece in a fixed orientation, as tried by the search.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Rows spanned in this orientation.
    h: usize,
    /// Columns spanned in this orientation.
    w: usize,
    /// 1-based index of the piece in the caller's input order.
    input: usize,
    /// Same physical piece in the other orientation, if listed.
    partner: Option<usize>,
}

/// Search state of one candidate-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Free,
    Placed,
    /// The partner orientation is on the board.
    Forbidden,
}

/// A committed placement, recorded for undo.
#[derive(Debug, Clone, Copy)]
struct Placement {
    cand: usize,
    row: usize,
    col: usize,
}

/// Builds the candidate list and the scan bound for the first placement.
///
/// Pieces are sorted by descending width, ties kept in input order. Without
/// rotation every piece appears once and the bound spans the whole list.
fn candidate_list(
    pieces: &[Piece],
    allow_rotation: bool,
    board_is_square: bool,
) -> (Vec<Candidate>, usize) {
    let mut order: Vec<usize> = (0..pieces.len()).collect();
    order.sort_by(|&a, &b| pieces[b].w.cmp(&pieces[a].w));

    if !allow_rotation {
        let cands: Vec<Candidate> = order
            .iter()
            .map(|&i| Candidate {
                h: pieces[i].h,
                w: pieces[i].w,
                input: i + 1,
                partner: None,
            })
            .collect();
        let bound = cands.len();
        return (cands, bound);
    }

    let rects: Vec<usize> = order.iter().copied().filter(|&i| !pieces[i].is_square()).collect();
    let squares: Vec<usize> = order.iter().copied().filter(|&i| pieces[i].is_square()).collect();
    let n = 2 * rects.len() + squares.len();

    let mut cands = Vec::with_capacity(n);
    for &i in &rects {
        cands.push(Candidate {
            h: pieces[i].h,
            w: pieces[i].w,
            input: i + 1,
            partner: None,
        });
    }
    for &i in &squares {
        cands.push(Candidate {
            h: pieces[i].h,
            w: pieces[i].w,
            input: i + 1,
            partner: None,
        });
    }
    for &i in rects.iter().rev() {
        cands.push(Candidate {
            h: pieces[i].w,
            w: pieces[i].h,
            input: i + 1,
            partner: None,
        });
    }
    // The two orientations of rectangle k sit at mirrored indices.
    for k in 0..rects.len() {
        cands[k].partner = Some(n - 1 - k);
        cands[n - 1 - k].partner = Some(k);
    }

    let first_bound = if board_is_square { n - rects.len() } else { n };
    (cands, first_bound)
}

fn can_place(grid: &Grid, cand: &Candidate, row: usize, col: usize) -> bool {
    row + cand.h <= grid.rows()
        && col + cand.w <= grid.cols()
        && grid.border_is_empty(row, col, cand.h, cand.w)
}

/// Runs the backtracking engine.
///
/// Assumes the façade's area and fit pre-checks have passed; call through
/// [`Packer`](crate::Packer) unless the input is known to satisfy them.
pub fn run_backtracking(
    board: &Board,
    pieces: &[Piece],
    allow_rotation: bool,
    progress: Option<&ProgressCallback>,
) -> Result<PackResult> {
    let total = pieces.len();
    let (cands, first_bound) =
        candidate_list(pieces, allow_rotation, board.rows() == board.cols());
    let n = cands.len();

    let mut grid = Grid::new(board.rows(), board.cols());
    let mut used = vec![Slot::Free; n];
    let mut stack: Vec<Placement> = Vec::with_capacity(total);
    let mut scan_from = 0usize;
    let mut ticker = Ticker::new(progress, total);

    while stack.len() < total {
        let Some((row, col)) = grid.first_empty() else {
            return Err(Error::InvariantViolation(
                "pieces remain but the grid has no empty cell".to_string(),
            ));
        };

        let bound = if stack.is_empty() { first_bound } else { n };
        let found = (scan_from..bound)
            .find(|&k| used[k] == Slot::Free && can_place(&grid, &cands[k], row, col));

        match found {
            Some(k) => {
                grid.fill_rect(row, col, cands[k].h, cands[k].w, k + 1);
                used[k] = Slot::Placed;
                if let Some(p) = cands[k].partner {
                    used[p] = Slot::Forbidden;
                }
                stack.push(Placement { cand: k, row, col });
                scan_from = 0;
            }
            None => {
                // Every candidate for this pivot is exhausted; undo the most
                // recent placement and resume scanning past it.
                let Some(last) = stack.pop() else {
                    return Ok(PackResult::infeasible(Algorithm::Backtracking)
                        .with_steps(ticker.steps()));
                };
                let cand = &cands[last.cand];
                grid.clear_rect(last.row, last.col, cand.h, cand.w);
                used[last.cand] = Slot::Free;
                if let Some(p) = cand.partner {
                    used[p] = Slot::Free;
                }
                scan_from = last.cand + 1;
            }
        }
        ticker.step(stack.len());
    }

    // Repaint with input-order piece indices.
    let mut witness = Grid::new(board.rows(), board.cols());
    for placement in &stack {
        let cand = &cands[placement.cand];
        witness.fill_rect(placement.row, placement.col, cand.h, cand.w, cand.input);
    }
    Ok(PackResult::solved(Algorithm::Backtracking, witness).with_steps(ticker.steps()))
}
