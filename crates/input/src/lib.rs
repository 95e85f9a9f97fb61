//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s. There is no
//! auto-repeat handling: one key press is one slide.

pub mod map;

pub use slide2048_types as types;

pub use map::{handle_key_event, should_quit};
