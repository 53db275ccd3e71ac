//! Benchmarks for move generation and game-state updates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::GameState;

/// Reach a position by playing coordinate moves from the start.
fn after(moves: &[&str]) -> GameState {
    let mut game = GameState::new();
    for text in moves {
        let mv = game.parse_move(text).expect("benchmark line must be legal");
        game.apply(mv).expect("benchmark line must be legal");
    }
    game
}

fn middlegame() -> GameState {
    after(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5"])
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut startpos = GameState::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut position = middlegame();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = GameState::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let position = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(position.legal_moves()))
    });

    let knight = "f3".parse().expect("valid square");
    group.bench_function("destinations", |b| {
        b.iter(|| black_box(position.legal_destinations(knight)))
    });

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_undo");

    let mut game = middlegame();
    let mv = game.parse_move("e1g1").expect("castling is legal");
    group.bench_function("castle", |b| {
        b.iter(|| {
            game.apply(black_box(mv)).expect("legal");
            game.undo().expect("just applied")
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply_undo);
criterion_main!(benches);
