//! Engine benchmarks on a fixed 6x6 instance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_rect::{Algorithm, Board, Config, Packer, Piece};

fn instance() -> (Board, Vec<Piece>) {
    let board = Board::new(6, 6);
    let pieces = [(1, 6), (1, 3), (5, 1), (2, 2), (3, 2), (4, 2), (4, 1)]
        .iter()
        .map(|&(h, w)| Piece::new(h, w))
        .collect();
    (board, pieces)
}

fn bench_engines(c: &mut Criterion) {
    let (board, pieces) = instance();

    c.bench_function("backtracking_6x6", |b| {
        let packer = Packer::new(Config::new().with_algorithm(Algorithm::Backtracking));
        b.iter(|| packer.pack(black_box(&board), black_box(&pieces)).unwrap())
    });

    c.bench_function("dancing_links_6x6", |b| {
        let packer = Packer::new(Config::new().with_algorithm(Algorithm::DancingLinks));
        b.iter(|| packer.pack(black_box(&board), black_box(&pieces)).unwrap())
    });

    #[cfg(feature = "milp")]
    c.bench_function("integer_programming_6x6", |b| {
        let packer = Packer::new(Config::new().with_algorithm(Algorithm::IntegerProgramming));
        b.iter(|| packer.pack(black_box(&board), black_box(&pieces)).unwrap())
    });
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
