//! Events reported by the game controller.
//!
//! Each command or tick returns the events it produced, oldest first. A single
//! lock-step drop produces at most one of each kind, so the buffer never grows
//! past four entries and never allocates.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// The active piece became part of the board at (x, y)
    Locked { kind: ShapeKind, x: i8, y: i8 },
    /// Full rows were removed
    LinesCleared { count: u32, points: u64 },
    /// The level went up
    LevelUp { level: u32 },
    /// Terminal notification, emitted exactly once
    GameOver { final_score: u64 },
}

/// Events produced by one entry point call
pub type Events = ArrayVec<GameEvent, 4>;
