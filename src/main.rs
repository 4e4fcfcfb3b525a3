//! Terminal runner (default binary).
//!
//! Owns the game value, feeds it key presses and frame ticks, and renders a
//! snapshot every frame. Stdout belongs to the renderer, so logs only go to a
//! file when `--log-file` is given.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::core::{GameEvent, GameState};
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long, help = "Seed for the piece sequence (random when omitted)")]
    seed: Option<u64>,

    #[arg(long, default_value_t = TICK_MS, help = "Frame interval in milliseconds")]
    tick_ms: u32,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info", help = "Log level (error, warn, info, debug, trace)")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn new_game(seed: Option<u64>) -> GameState {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "new game");
    GameState::new(seed)
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let mut game = new_game(cli.seed);
    let mut snap = game.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(cli.tick_ms.max(1) as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat is welcome here: held keys keep moving.
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) && game.game_over() {
                        game = new_game(None);
                        last_tick = Instant::now();
                        continue;
                    }
                    if let Some(command) = handle_key_event(key) {
                        log_events(&game.apply_command(command));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            log_events(&game.tick(elapsed_ms));
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        if let GameEvent::GameOver { final_score } = event {
            info!(final_score, "press r to restart or q to quit");
        }
    }
}
