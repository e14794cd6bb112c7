//! Level file loading.
//!
//! Reads level definitions from TOML and produces a [`LevelCatalog`](crate::core::LevelCatalog)
//! for the game session. Parsing is the only job here; puzzle rules live in `core`.

pub mod error;
pub mod loader;

pub use cardinal_chains_core as core;
pub use cardinal_chains_types as types;

pub use error::LevelLoadError;
pub use loader::{parse_row, LevelLoader, LoadResult};
