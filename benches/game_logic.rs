use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Command, ShapeKind, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.tick(black_box(TICK_MS))
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, Some(ShapeKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            state.apply_command(black_box(Command::MoveLeft));
            state.apply_command(black_box(Command::MoveRight))
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| state.apply_command(black_box(Command::RotateCw)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.apply_command(black_box(Command::HardDrop))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_shift,
    bench_rotate,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
