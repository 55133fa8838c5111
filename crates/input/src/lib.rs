//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and decides which
//! event kinds count as a key-down.

pub mod map;

pub use bike_dash_types as types;

pub use map::{handle_key_event, is_key_down, should_quit};
