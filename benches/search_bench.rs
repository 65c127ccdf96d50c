//! Benchmarks for the Tic-Tac-Toe minimax search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arcade_core::games::tictactoe::{best_reply, Board, Mark};

fn opening_reply_benchmark(c: &mut Criterion) {
    // Worst case: the first reply searches the full remaining tree.
    let board = Board::new().with_mark(4, Mark::Player);

    c.bench_function("reply_after_center_opening", |b| {
        b.iter(|| best_reply(black_box(board)))
    });
}

fn midgame_reply_benchmark(c: &mut Criterion) {
    let board = Board::new()
        .with_mark(4, Mark::Player)
        .with_mark(0, Mark::Opponent)
        .with_mark(8, Mark::Player);

    c.bench_function("reply_in_midgame", |b| {
        b.iter(|| best_reply(black_box(board)))
    });
}

criterion_group!(benches, opening_reply_benchmark, midgame_reply_benchmark);
criterion_main!(benches);
