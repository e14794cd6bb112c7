//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Bindings follow
//! the classic prompt letters (N/S/E/W, B, R, X, C, Q) plus arrow keys.

pub mod map;

pub use cardinal_chains_types as types;

pub use map::{handle_key_event, should_quit};
