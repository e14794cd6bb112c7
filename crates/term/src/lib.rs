//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all colour and glyph choices out of the engine
//! - Redraw only the cells that changed between turns

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use cardinal_chains_core as core;
pub use cardinal_chains_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{chain_color, AnchorY, GameView, Viewport, CHAIN_PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
