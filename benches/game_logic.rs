use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrion::core::{Board, GameSession};
use tetrion::types::{GameCommand, PieceColor};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start_session();

    c.bench_function("tick_one_frame", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_four_full_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..4 {
                board.fill_row(y, Some(PieceColor::Cyan));
            }
            board.clear_full_lines();
        })
    });
}

fn bench_next_round(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start_session();

    c.bench_function("next_round", |b| {
        b.iter(|| {
            session.begin_round();
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start_session();

    c.bench_function("shift_piece", |b| {
        b.iter(|| {
            session.apply_command(GameCommand::MoveRight);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start_session();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            session.apply_command(GameCommand::Rotate);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_next_round,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
