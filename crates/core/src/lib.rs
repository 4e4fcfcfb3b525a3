//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependency on terminals, key handling or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is exercised by unit tests next to its module
//! - **Portable**: any host that can deliver frame ticks can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, shape matrices, clockwise rotation, [`Piece`]
//! - [`factory`]: uniform random piece generation from an injected RNG
//! - [`board`]: 10x20 grid, edge rule, row clearing and shifting
//! - [`collision`]: shape placement vs. board
//! - [`movement`]: tentative shift/rotate/drop with rollback
//! - [`scoring`]: line points, levels and gravity speed
//! - [`gravity`]: elapsed-time accumulator
//! - [`game_state`]: the controller that wires it all together
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameEvent, GameState};
//! use blockfall_types::{Command, RunState};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::RotateCw);
//! let events = game.apply_command(Command::HardDrop);
//!
//! assert!(matches!(events[0], GameEvent::Locked { .. }));
//! assert_eq!(game.run_state(), RunState::Running);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`] every frame with the elapsed time in
//! milliseconds. Once the accumulated time exceeds the level's drop interval
//! (1000ms at level 1, 100ms less per level, never below 100ms) the active
//! piece falls one row.

pub mod board;
pub mod collision;
pub mod events;
pub mod factory;
pub mod game_state;
pub mod gravity;
pub mod movement;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use events::{Events, GameEvent};
pub use factory::PieceFactory;
pub use game_state::GameState;
pub use gravity::Gravity;
pub use movement::DropOutcome;
pub use pieces::{get_shape, Piece, Shape};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, Scoreboard};
pub use snapshot::{GameSnapshot, PieceSnapshot};
