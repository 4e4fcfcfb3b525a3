//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`]s. The engine never
//! sees key codes; the host feeds it the mapped commands.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
