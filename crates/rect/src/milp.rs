//! Mixed-integer feasibility engine.
//!
//! The tiling decision is encoded as a pure feasibility MIP solved with
//! HiGHS via the `good_lp` crate. No objective is optimized; any primal
//! solution is a tiling.
//!
//! # Formulation
//!
//! - Integer anchor variables `px[i]`, `py[i]` for each piece
//! - Binary `rot[i]` plus integer extents `sx[i]`, `sy[i]` when rotation
//!   is allowed; the extents are linked to `rot[i]` linearly since piece
//!   dimensions are constants
//! - Per pair, four binary separation selectors (left/right/below/above)
//!   gating big-M inequalities, at least one of which must be active
//! - Optional ordering of identical pieces to prune permutations
//!
//! The board dimensions are large enough to serve as big-M constants
//! because the anchor bounds already confine every piece to the board.
//!
//! # Example
//!
//! ```ignore
//! use tessera_rect::milp::run_milp;
//!
//! let result = run_milp(&board, &pieces, false, true, None)?;
//! ```

use tessera_core::{Board, PackResult, Piece, ProgressCallback, Result};

#[cfg(feature = "milp")]
use tessera_core::{verify_tiling, Algorithm, Error, Grid};

#[cfg(feature = "milp")]
use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

#[cfg(feature = "milp")]
use crate::packer::Ticker;

/// Orientation variables for one piece.
#[cfg(feature = "milp")]
struct OrientationVars {
    /// 1 when the piece is rotated by 90 degrees.
    rot: Variable,
    /// Columns spanned.
    sx: Variable,
    /// Rows spanned.
    sy: Variable,
}

/// Separation selectors for one unordered pair.
#[cfg(feature = "milp")]
struct PairVars {
    i: usize,
    j: usize,
    left: Variable,
    right: Variable,
    below: Variable,
    above: Variable,
}

/// Runs the MIP engine.
///
/// Assumes the façade's area and fit pre-checks have passed; call through
/// [`Packer`](crate::Packer) unless the input is known to satisfy them.
///
/// Infeasibility of the model is the infeasibility of the instance and is
/// returned as data; a backend failure is [`Error::SolverUnavailable`].
#[cfg(feature = "milp")]
pub fn run_milp(
    board: &Board,
    pieces: &[Piece],
    allow_rotation: bool,
    use_symmetry_breaking: bool,
    progress: Option<&ProgressCallback>,
) -> Result<PackResult> {
    let n = pieces.len();
    let rows_f = board.rows() as f64;
    let cols_f = board.cols() as f64;
    let mut ticker = Ticker::new(progress, n);

    let mut vars = ProblemVariables::new();

    let px: Vec<Variable> = (0..n)
        .map(|i| vars.add(variable().integer().min(0.0).max(cols_f).name(format!("px_{i}"))))
        .collect();
    let py: Vec<Variable> = (0..n)
        .map(|i| vars.add(variable().integer().min(0.0).max(rows_f).name(format!("py_{i}"))))
        .collect();

    let orientation: Option<Vec<OrientationVars>> = if allow_rotation {
        Some(
            (0..n)
                .map(|i| OrientationVars {
                    rot: vars.add(variable().binary().name(format!("rot_{i}"))),
                    sx: vars.add(variable().integer().min(1.0).max(cols_f).name(format!("sx_{i}"))),
                    sy: vars.add(variable().integer().min(1.0).max(rows_f).name(format!("sy_{i}"))),
                })
                .collect(),
        )
    } else {
        None
    };

    let mut pairs: Vec<PairVars> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push(PairVars {
                i,
                j,
                left: vars.add(variable().binary().name(format!("left_{i}_{j}"))),
                right: vars.add(variable().binary().name(format!("right_{i}_{j}"))),
                below: vars.add(variable().binary().name(format!("below_{i}_{j}"))),
                above: vars.add(variable().binary().name(format!("above_{i}_{j}"))),
            });
        }
    }

    // Columns (x) and rows (y) spanned by piece i, as linear expressions.
    let ext_x = |i: usize| -> Expression {
        match &orientation {
            Some(o) => o[i].sx.into(),
            None => (pieces[i].w as f64).into(),
        }
    };
    let ext_y = |i: usize| -> Expression {
        match &orientation {
            Some(o) => o[i].sy.into(),
            None => (pieces[i].h as f64).into(),
        }
    };

    // Feasibility only: the objective is constant.
    let mut model = vars.minimise(Expression::from(0.0)).using(default_solver);

    if let Some(o) = &orientation {
        for i in 0..n {
            let (h, w) = (pieces[i].h as f64, pieces[i].w as f64);
            model = model.with(constraint!(o[i].sx == w + (h - w) * o[i].rot));
            model = model.with(constraint!(o[i].sy == h + (w - h) * o[i].rot));
        }
    }

    for i in 0..n {
        let ex = ext_x(i);
        let ey = ext_y(i);
        model = model.with(constraint!(px[i] + ex <= cols_f));
        model = model.with(constraint!(py[i] + ey <= rows_f));
    }

    // Non-overlap: at least one separating direction per pair, each gated
    // by a big-M inequality that goes slack when its selector is 0.
    for pair in &pairs {
        let (i, j) = (pair.i, pair.j);
        ticker.step(0);

        model = model.with(constraint!(
            pair.left + pair.right + pair.below + pair.above >= 1.0
        ));

        let ex_i = ext_x(i);
        let ex_j = ext_x(j);
        let ey_i = ext_y(i);
        let ey_j = ext_y(j);
        model = model.with(constraint!(px[i] - px[j] + ex_i + cols_f * pair.left <= cols_f));
        model = model.with(constraint!(px[j] - px[i] + ex_j + cols_f * pair.right <= cols_f));
        model = model.with(constraint!(py[i] - py[j] + ey_i + rows_f * pair.below <= rows_f));
        model = model.with(constraint!(py[j] - py[i] + ey_j + rows_f * pair.above <= rows_f));
    }

    // Identical pieces are interchangeable; ordering their anchors prunes
    // permuted duplicates of the same layout.
    if use_symmetry_breaking {
        for i in 0..n.saturating_sub(1) {
            if pieces[i] == pieces[i + 1] {
                model = model.with(constraint!(px[i] <= px[i + 1]));
            }
        }
    }

    log::info!(
        "solving MIP feasibility model: {} pieces, {} separation pairs, rotation {}",
        n,
        pairs.len(),
        allow_rotation
    );

    match model.solve() {
        Ok(solution) => {
            let mut witness = Grid::new(board.rows(), board.cols());
            for i in 0..n {
                // Backends may report integers off by an epsilon; round
                // before painting.
                let x = solution.value(px[i]).round() as usize;
                let y = solution.value(py[i]).round() as usize;
                let (h, w) = match &orientation {
                    Some(o) => (
                        solution.value(o[i].sy).round() as usize,
                        solution.value(o[i].sx).round() as usize,
                    ),
                    None => (pieces[i].h, pieces[i].w),
                };
                if y + h > board.rows() || x + w > board.cols() {
                    return Err(Error::InvariantViolation(format!(
                        "solver placed piece {} at ({y}, {x}) with extents {h}x{w}, outside the board",
                        i + 1
                    )));
                }
                witness.fill_rect(y, x, h, w, i + 1);
            }
            verify_tiling(board, pieces, &witness, allow_rotation)?;
            Ok(PackResult::solved(Algorithm::IntegerProgramming, witness)
                .with_steps(ticker.steps()))
        }
        Err(ResolutionError::Infeasible) => {
            Ok(PackResult::infeasible(Algorithm::IntegerProgramming).with_steps(ticker.steps()))
        }
        Err(err) => Err(Error::SolverUnavailable(format!(
            "MIP backend failed: {err}"
        ))),
    }
}

/// Stub without the `milp` feature: the backend is absent.
#[cfg(not(feature = "milp"))]
pub fn run_milp(
    _board: &Board,
    _pieces: &[Piece],
    _allow_rotation: bool,
    _use_symmetry_breaking: bool,
    _progress: Option<&ProgressCallback>,
) -> Result<PackResult> {
    Err(tessera_core::Error::SolverUnavailable(
        "tessera-rect was built without the `milp` feature".to_string(),
    ))
}

/// Returns true if the MIP backend is compiled in.
pub fn is_milp_available() -> bool {
    cfg!(feature = "milp")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(dims: &[(usize, usize)]) -> Vec<Piece> {
        dims.iter().map(|&(h, w)| Piece::new(h, w)).collect()
    }

    #[test]
    fn test_is_milp_available_matches_feature() {
        assert_eq!(is_milp_available(), cfg!(feature = "milp"));
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_solves_simple_tiling() {
        let board = Board::new(2, 3);
        let input = pieces(&[(2, 2), (2, 1)]);
        let result = run_milp(&board, &input, false, true, None).unwrap();

        assert!(result.feasible);
        assert!(verify_tiling(&board, &input, &result.grid.unwrap(), false).is_ok());
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_reports_infeasible_when_shapes_cannot_interlock() {
        let board = Board::new(3, 3);
        let input = pieces(&[(2, 2), (2, 2), (1, 1)]);
        let result = run_milp(&board, &input, false, true, None).unwrap();

        assert!(!result.feasible);
        assert!(result.grid.is_none());
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_rotation_required_to_tile() {
        let board = Board::new(1, 2);
        let input = pieces(&[(2, 1)]);

        assert!(!run_milp(&board, &input, false, true, None).unwrap().feasible);

        let rotated = run_milp(&board, &input, true, true, None).unwrap();
        assert!(rotated.feasible);
        assert!(verify_tiling(&board, &input, &rotated.grid.unwrap(), true).is_ok());
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_symmetry_breaking_keeps_duplicates_feasible() {
        let board = Board::new(2, 2);
        let input = pieces(&[(1, 2), (1, 2)]);

        for enabled in [true, false] {
            let result = run_milp(&board, &input, false, enabled, None).unwrap();
            assert!(result.feasible);
        }
    }

    #[test]
    #[cfg(not(feature = "milp"))]
    fn test_stub_reports_backend_unavailable() {
        let board = Board::new(2, 2);
        let input = pieces(&[(2, 2)]);
        let err = run_milp(&board, &input, false, true, None).unwrap_err();
        assert!(matches!(err, tessera_core::Error::SolverUnavailable(_)));
    }
}
