//! Terminal rendering for the game.
//!
//! Frames are composed into a plain framebuffer by [`GameView`] (pure, no I/O)
//! and flushed by [`TerminalRenderer`], which only sends cells that changed
//! since the previous frame.
//!
//! Board cells are drawn 2 columns wide by default so they look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
