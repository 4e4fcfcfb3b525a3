//! Game state module - the game controller
//!
//! Ties together the board, the piece factory, movement, scoring and gravity,
//! and exposes the command surface. All transitions happen synchronously inside
//! [`GameState::apply_command`] or [`GameState::tick`]; once the game is over
//! both are no-ops.

use rand::rngs::StdRng;
use rand::RngCore;
use tracing::{debug, info};

use crate::board::Board;
use crate::events::{Events, GameEvent};
use crate::factory::PieceFactory;
use crate::gravity::Gravity;
use crate::movement::{self, DropOutcome};
use crate::pieces::Piece;
use crate::scoring::Scoreboard;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, RunState};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    active: Piece,
    next: Piece,
    factory: PieceFactory<R>,
    scoreboard: Scoreboard,
    gravity: Gravity,
    run_state: RunState,
}

impl GameState<StdRng> {
    /// Create a new running game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_factory(PieceFactory::seeded(seed))
    }
}

impl<R: RngCore> GameState<R> {
    /// Create a new running game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::with_factory(PieceFactory::new(rng))
    }

    fn with_factory(mut factory: PieceFactory<R>) -> Self {
        let active = factory.create_piece();
        let next = factory.create_piece();
        let scoreboard = Scoreboard::new();

        Self {
            board: Board::new(),
            active,
            next,
            factory,
            gravity: Gravity::new(scoreboard.level()),
            scoreboard,
            run_state: RunState::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score()
    }

    pub fn lines(&self) -> u32 {
        self.scoreboard.lines()
    }

    pub fn level(&self) -> u32 {
        self.scoreboard.level()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.gravity.interval_ms()
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.gravity.accumulator_ms()
    }

    /// Row the active piece would lock at if dropped now
    pub fn landing_y(&self) -> i8 {
        self.active.y + movement::drop_distance(&self.board, &self.active)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = PieceSnapshot::from(self.active);
        out.landing_y = self.landing_y();
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score();
        out.lines = self.lines();
        out.level = self.level();
        out.run_state = self.run_state;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            board: Default::default(),
            active: self.active.into(),
            landing_y: 0,
            next: self.next.into(),
            score: 0,
            lines: 0,
            level: 0,
            run_state: self.run_state,
            drop_interval_ms: 0,
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player command.
    ///
    /// Everything except `TogglePause` is ignored unless the game is running.
    /// `TogglePause` is ignored once the game is over.
    pub fn apply_command(&mut self, command: Command) -> Events {
        let mut events = Events::new();

        match (self.run_state, command) {
            (RunState::GameOver, _) => {
                debug!(command = command.as_str(), "ignored after game over");
            }
            (RunState::Running, Command::TogglePause) => {
                self.run_state = RunState::Paused;
                info!(score = self.score(), "paused");
            }
            (RunState::Paused, Command::TogglePause) => {
                self.run_state = RunState::Running;
                self.gravity.rebase();
                info!("resumed");
            }
            (RunState::Paused, _) => {
                debug!(command = command.as_str(), "ignored while paused");
            }
            (RunState::Running, Command::MoveLeft) => {
                movement::shift(&self.board, &mut self.active, -1);
            }
            (RunState::Running, Command::MoveRight) => {
                movement::shift(&self.board, &mut self.active, 1);
            }
            (RunState::Running, Command::RotateCw) => {
                movement::rotate(&self.board, &mut self.active);
            }
            (RunState::Running, Command::SoftDrop) => {
                self.drop_step(&mut events);
            }
            (RunState::Running, Command::HardDrop) => {
                let distance = movement::drop_distance(&self.board, &self.active);
                self.active.y += distance;
                self.drop_step(&mut events);
            }
        }

        events
    }

    /// Advance gravity by one host frame.
    pub fn tick(&mut self, elapsed_ms: u32) -> Events {
        let mut events = Events::new();
        if self.run_state != RunState::Running {
            return events;
        }
        if self.gravity.advance(elapsed_ms) {
            self.drop_step(&mut events);
        }
        events
    }

    /// Lock-step drop: fall one row, or lock the piece where it is.
    fn drop_step(&mut self, events: &mut Events) {
        let outcome = movement::soft_drop(&self.board, &mut self.active);
        self.gravity.reset();
        if outcome == DropOutcome::Lock {
            self.lock_active(events);
        }
    }

    fn lock_active(&mut self, events: &mut Events) {
        debug_assert_eq!(self.run_state, RunState::Running);

        let piece = self.active;
        self.board.merge(&piece.shape, piece.x, piece.y, piece.kind);
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "locked");
        events.push(GameEvent::Locked {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
        });

        let cleared = self.board.clear_full_rows();
        let result = self.scoreboard.apply_clear(cleared.len() as u32);
        if result.lines > 0 {
            info!(
                lines = result.lines,
                points = result.points,
                total = self.score(),
                "lines cleared"
            );
            events.push(GameEvent::LinesCleared {
                count: result.lines,
                points: result.points,
            });
        }
        if let Some(level) = result.level_up {
            self.gravity.set_level(level);
            info!(level, interval_ms = self.gravity.interval_ms(), "level up");
            events.push(GameEvent::LevelUp { level });
        }

        // Only a piece that could not leave its spawn row ends the game.
        if piece.y == 0 {
            self.run_state = RunState::GameOver;
            info!(final_score = self.score(), lines = self.lines(), "game over");
            events.push(GameEvent::GameOver {
                final_score: self.score(),
            });
            return;
        }

        let fresh = self.factory.create_piece();
        self.active = std::mem::replace(&mut self.next, fresh);
        self.gravity.reset();
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
