//! Shared types and rule constants.
//!
//! Everything here is plain data: the core engine, the terminal view and the
//! key mapper all agree on these definitions without depending on each other.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (4, 0), i.e. `BOARD_WIDTH / 2 - 1` on the top row
//!
//! # Gravity
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | ... | -100ms per level |
//! | 10+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::T.color().to_hex(), "#ff00ff");
//! assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for every new piece (horizontally centered)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row for every new piece
pub const SPAWN_Y: i8 = 0;

/// Default host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level at clear time
pub const POINTS_PER_LINE: u64 = 100;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;

/// 24-bit color attached to each piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The seven piece kinds. A locked board cell stores the kind it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Catalog order. The factory draws uniformly from this array.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Fixed color identifier of the kind.
    pub const fn color(self) -> Color {
        match self {
            ShapeKind::I => Color::new(0x00, 0xff, 0xff),
            ShapeKind::O => Color::new(0xff, 0xff, 0x00),
            ShapeKind::T => Color::new(0xff, 0x00, 0xff),
            ShapeKind::L => Color::new(0xff, 0xa5, 0x00),
            ShapeKind::J => Color::new(0x00, 0x00, 0xff),
            ShapeKind::S => Color::new(0x00, 0xff, 0x00),
            ShapeKind::Z => Color::new(0xff, 0x00, 0x00),
        }
    }

    /// Compact non-zero id used in `u8` board grids (0 means empty).
    pub const fn id(self) -> u8 {
        match self {
            ShapeKind::I => 1,
            ShapeKind::O => 2,
            ShapeKind::T => 3,
            ShapeKind::L => 4,
            ShapeKind::J => 5,
            ShapeKind::S => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Inverse of [`ShapeKind::id`].
    pub fn from_id(id: u8) -> Option<Self> {
        ShapeKind::ALL.iter().copied().find(|k| k.id() == id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = locked cell of that kind)
pub type Cell = Option<ShapeKind>;

/// Lifecycle of a game session. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "gameOver",
        }
    }
}

/// Player commands accepted by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    TogglePause,
}

impl Command {
    /// Parse a command name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotatecw" => Some(Command::RotateCw),
            "togglepause" | "pause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::RotateCw => "rotateCw",
            Command::TogglePause => "togglePause",
        }
    }
}
