use serde::Serialize;

use crate::pieces::{Piece, Shape};
use crate::types::{RunState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a session for renderers and other observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Shape ids per cell, 0 = empty
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: PieceSnapshot,
    /// Row the active piece would lock at if dropped now
    pub landing_y: i8,
    pub next: PieceSnapshot,
    pub score: u64,
    pub lines: u32,
    pub level: u32,
    pub run_state: RunState,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn playable(&self) -> bool {
        self.run_state == RunState::Running
    }
}
