use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cardinal_chains::core::{ChainSet, Level};
use cardinal_chains::types::Direction;

/// 16x16 snake: row-major climbing values, one anchor top-left.
fn snake_level() -> Level {
    let mut rows = Vec::new();
    let mut value = 1;
    for r in 0..16 {
        let mut row = Vec::new();
        for _ in 0..16 {
            row.push(value);
            value += 1;
        }
        if r % 2 == 1 {
            row.reverse();
        }
        rows.push(row);
    }
    rows[0][0] = -1;
    Level::new(1, rows)
}

fn snake_moves() -> Vec<Direction> {
    let mut moves = Vec::new();
    for r in 0..16 {
        let d = if r % 2 == 0 { Direction::East } else { Direction::West };
        moves.extend(std::iter::repeat(d).take(15));
        if r < 15 {
            moves.push(Direction::South);
        }
    }
    moves
}

fn bench_fill_level(c: &mut Criterion) {
    let level = snake_level();
    let moves = snake_moves();

    c.bench_function("fill_16x16_snake", |b| {
        b.iter(|| {
            let mut set = ChainSet::initialize(&level);
            for &d in &moves {
                set.try_move(&level, 0, black_box(d));
            }
            set
        })
    });
}

fn bench_completion_check(c: &mut Criterion) {
    let level = snake_level();
    let mut set = ChainSet::initialize(&level);
    for d in snake_moves() {
        set.try_move(&level, 0, d);
    }

    c.bench_function("is_completed_full_16x16", |b| {
        b.iter(|| black_box(set.is_completed(black_box(&level))))
    });
}

fn bench_undo_redo(c: &mut Criterion) {
    let level = snake_level();
    let mut set = ChainSet::initialize(&level);
    for d in snake_moves().into_iter().take(100) {
        set.try_move(&level, 0, d);
    }

    c.bench_function("undo_then_move", |b| {
        b.iter(|| {
            let mut s = set.clone();
            s.undo_last(0);
            s.try_move(&level, 0, black_box(Direction::East));
            s
        })
    });
}

criterion_group!(
    benches,
    bench_fill_level,
    bench_completion_check,
    bench_undo_redo
);
criterion_main!(benches);
