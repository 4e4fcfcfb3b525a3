use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::GameState;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Command, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

// Both gates share the global counter, so they must not run concurrently.
static SERIAL: std::sync::Mutex<()> = std::sync::Mutex::new(());

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let mut gs = GameState::new(1);
    let _ = gs.tick(TICK_MS);
    let _ = gs.apply_command(Command::MoveLeft);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = gs.tick(TICK_MS);
        }

        for _ in 0..50 {
            let _ = gs.apply_command(Command::MoveLeft);
            let _ = gs.apply_command(Command::MoveRight);
            let _ = gs.apply_command(Command::RotateCw);
            let _ = gs.apply_command(Command::SoftDrop);
        }

        // Hard drops drive the lock, line clear and game over paths.
        for _ in 0..60 {
            let _ = gs.apply_command(Command::HardDrop);
            if gs.game_over() {
                gs = GameState::new(2);
            }
        }
    });

    assert_eq!(allocs, 0);
}

#[test]
fn snapshot_and_render_do_not_allocate_after_warmup() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(1);
    let mut snap = gs.snapshot();
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            if i % 10 == 0 {
                let _ = gs.apply_command(Command::HardDrop);
            }
            let _ = gs.tick(TICK_MS);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
