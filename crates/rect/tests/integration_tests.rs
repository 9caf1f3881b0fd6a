//! Integration tests for tessera-rect.

use tessera_rect::{verify_tiling, Algorithm, Board, Config, Packer, Piece};

fn pieces(dims: &[(usize, usize)]) -> Vec<Piece> {
    dims.iter().map(|&(h, w)| Piece::new(h, w)).collect()
}

/// Packs and asserts feasibility, returning nothing but panicking with the
/// instance description on any violated invariant.
fn assert_tiles(
    rows: usize,
    cols: usize,
    dims: &[(usize, usize)],
    rotation: bool,
    algorithm: Algorithm,
) {
    let board = Board::new(rows, cols);
    let input = pieces(dims);
    let packer = Packer::new(Config::new().with_algorithm(algorithm).with_rotation(rotation));

    let result = packer.pack(&board, &input).unwrap();
    assert!(
        result.feasible,
        "{algorithm:?} found no tiling of {rows}x{cols} by {dims:?} (rotation={rotation})"
    );
    let grid = result.grid.expect("feasible result must carry a witness");
    verify_tiling(&board, &input, &grid, rotation)
        .unwrap_or_else(|err| panic!("{algorithm:?} returned a bad witness: {err}"));
}

fn assert_rejects(
    rows: usize,
    cols: usize,
    dims: &[(usize, usize)],
    rotation: bool,
    algorithm: Algorithm,
) {
    let board = Board::new(rows, cols);
    let input = pieces(dims);
    let packer = Packer::new(Config::new().with_algorithm(algorithm).with_rotation(rotation));

    let result = packer.pack(&board, &input).unwrap();
    assert!(!result.feasible);
    assert!(result.grid.is_none());
}

fn all_algorithms() -> Vec<Algorithm> {
    let mut algorithms = vec![Algorithm::Backtracking, Algorithm::DancingLinks];
    if tessera_rect::is_milp_available() {
        algorithms.push(Algorithm::IntegerProgramming);
    }
    algorithms
}

mod backtracking_scenarios {
    use super::*;

    #[test]
    fn test_tiles_6x6() {
        assert_tiles(
            6,
            6,
            &[(1, 6), (1, 3), (5, 1), (2, 2), (3, 2), (4, 2), (4, 1)],
            false,
            Algorithm::Backtracking,
        );
    }

    #[test]
    fn test_tiles_6x6_with_rotation() {
        assert_tiles(
            6,
            6,
            &[(5, 1), (1, 3), (5, 1), (2, 2), (3, 2), (3, 3), (4, 1)],
            true,
            Algorithm::Backtracking,
        );
    }
}

mod dancing_links_scenarios {
    use super::*;

    #[test]
    fn test_tiles_10x10() {
        assert_tiles(
            10,
            10,
            &[(4, 3), (1, 7), (3, 7), (6, 2), (6, 5), (6, 3)],
            false,
            Algorithm::DancingLinks,
        );
    }

    #[test]
    fn test_tiles_10x10_with_rotation() {
        assert_tiles(
            10,
            10,
            &[(4, 3), (7, 1), (7, 3), (6, 2), (5, 6), (6, 3)],
            true,
            Algorithm::DancingLinks,
        );
    }
}

#[cfg(feature = "milp")]
mod integer_programming_scenarios {
    use super::*;

    #[test]
    fn test_tiles_6x7() {
        assert_tiles(
            6,
            7,
            &[(1, 4), (6, 1), (2, 2), (4, 2), (2, 3), (5, 1), (3, 3)],
            false,
            Algorithm::IntegerProgramming,
        );
    }

    #[test]
    fn test_tiles_6x7_with_rotation() {
        assert_tiles(
            6,
            7,
            &[(1, 4), (1, 6), (2, 2), (2, 4), (3, 2), (5, 1), (3, 3)],
            true,
            Algorithm::IntegerProgramming,
        );
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_area_mismatch_rejected_by_every_algorithm() {
        for algorithm in all_algorithms() {
            assert_rejects(2, 2, &[(1, 1), (1, 1), (1, 1)], false, algorithm);
        }
    }

    #[test]
    fn test_unfittable_piece_rejected_by_every_algorithm() {
        for algorithm in all_algorithms() {
            assert_rejects(2, 3, &[(3, 1), (3, 1)], false, algorithm);
        }
    }

    #[test]
    fn test_empty_piece_list_cannot_tile_a_positive_board() {
        for algorithm in all_algorithms() {
            assert_rejects(1, 1, &[], false, algorithm);
        }
    }
}

mod cross_engine_agreement {
    use super::*;

    /// Instances that pass both pre-checks, so the verdict comes from the
    /// engines themselves.
    const CASES: &[((usize, usize), &[(usize, usize)], bool, bool)] = &[
        // Feasible without rotation.
        ((3, 3), &[(2, 2), (1, 3), (1, 1), (1, 1)], false, true),
        ((2, 4), &[(2, 3), (1, 1), (1, 1)], false, true),
        ((5, 5), &[(3, 3), (3, 2), (2, 3), (2, 2)], false, true),
        // Two 2x2 blocks cannot coexist in a 3x3 board.
        ((3, 3), &[(2, 2), (2, 2), (1, 1)], false, false),
        // Feasible only when the piece may rotate.
        ((1, 2), &[(2, 1)], true, true),
        ((4, 4), &[(4, 2), (2, 4)], true, true),
        // Rotation does not rescue this one.
        ((3, 3), &[(2, 2), (2, 2), (1, 1)], true, false),
    ];

    #[test]
    fn test_all_engines_return_the_same_verdict() {
        for ((rows, cols), dims, rotation, expected) in CASES {
            let board = Board::new(*rows, *cols);
            let input = pieces(dims);
            for algorithm in all_algorithms() {
                let packer = Packer::new(
                    Config::new()
                        .with_algorithm(algorithm)
                        .with_rotation(*rotation),
                );
                let result = packer.pack(&board, &input).unwrap();
                assert_eq!(
                    result.feasible, *expected,
                    "{algorithm:?} disagrees on {rows}x{cols} {dims:?} rotation={rotation}"
                );
                if let Some(grid) = result.grid {
                    verify_tiling(&board, &input, &grid, *rotation).unwrap();
                }
            }
        }
    }
}

mod witnesses {
    use super::*;

    #[test]
    fn test_every_witness_covers_each_piece_exactly_once() {
        let board = Board::new(6, 6);
        let dims = [(1, 6), (1, 3), (5, 1), (2, 2), (3, 2), (4, 2), (4, 1)];
        let input = pieces(&dims);

        for algorithm in all_algorithms() {
            let packer = Packer::new(Config::new().with_algorithm(algorithm));
            let grid = packer.pack(&board, &input).unwrap().grid.unwrap();

            // Cell counts per index match the piece areas.
            for (i, piece) in input.iter().enumerate() {
                let count = (0..6)
                    .flat_map(|r| (0..6).map(move |c| (r, c)))
                    .filter(|&(r, c)| grid.cell(r, c) == i + 1)
                    .count();
                assert_eq!(
                    count,
                    piece.area(),
                    "{algorithm:?}: piece {} covers {count} cells",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_square_board_witness_starts_with_an_upright_piece() {
        // Two dominoes tile a 2x2 board horizontally or vertically; the
        // rotation search is pinned to the upright layout.
        let board = Board::new(2, 2);
        let input = pieces(&[(1, 2), (1, 2)]);
        let packer = Packer::new(Config::new().with_rotation(true));

        let grid = packer.pack(&board, &input).unwrap().grid.unwrap();
        assert_eq!(grid.cell(0, 0), grid.cell(0, 1));
    }
}
