//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use obstacle_checkers::board::{find_best_move, Board, Player, SearchParams};

/// Positions used across benchmarks: the opening, a crowded middlegame and
/// a multi-jump position with kings.
fn positions() -> Vec<(&'static str, Board)> {
    let startpos = Board::new(2, &mut StdRng::seed_from_u64(1));
    let middlegame = Board::from_diagram(".b.b.b/b...b./...#.b/w.w.../.w.#.w/w...w.")
        .expect("valid middlegame diagram");
    let captures = Board::from_diagram("....../..w.w./...B../..w.w./....../......")
        .expect("valid capture diagram");
    vec![
        ("startpos", startpos),
        ("middlegame", middlegame),
        ("captures", captures),
    ]
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("playable", name), &board, |b, board| {
            b.iter(|| black_box(board.playable_moves(Player::Two)))
        });
        group.bench_with_input(BenchmarkId::new("captures", name), &board, |b, board| {
            b.iter(|| black_box(board.capture_moves(Player::Two)))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(Player::Two)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for (name, board) in positions() {
        for depth in [2, 3, 4] {
            let params = SearchParams::with_depth(depth);
            group.bench_with_input(BenchmarkId::new(name, depth), &params, |b, params| {
                b.iter(|| find_best_move(black_box(&board), params))
            });
        }
    }

    group.finish();
}

fn bench_obstacles(c: &mut Criterion) {
    let board = Board::starting_position(2);
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("refresh_obstacles", |b| {
        b.iter(|| {
            let mut next = board.clone();
            next.refresh_obstacles(&mut rng);
            black_box(next)
        })
    });
}

criterion_group!(
    benches,
    bench_movegen,
    bench_eval,
    bench_search,
    bench_obstacles
);
criterion_main!(benches);
