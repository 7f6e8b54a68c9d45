use criterion::*;

use flipside_othello::test_utils::run_perft;
use flipside_othello::{Board, Side};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| black_box(board).legal_moves(black_box(Side::Black)))
    });
}

criterion_group! {
    name = perft;
    config = Criterion::default();
    targets = criterion_perft, criterion_legal_moves
}

criterion_main!(perft);
