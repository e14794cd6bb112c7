//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules, chain state and level progression.
//! It has **zero dependencies** on UI, terminal or file I/O, making it:
//!
//! - **Deterministic**: The same actions on the same level always give the same chains
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Can run behind any driver (terminal, scripted, headless)
//!
//! # Module Structure
//!
//! - [`level`]: Immutable level grids and the ordered level catalog
//! - [`chain`]: Chains, the chain set and the move/undo/erase/restart rules
//! - [`session`]: Level progression state machine and action dispatch
//! - [`snapshot`]: Borrowed read-only view for renderers
//! - [`error`]: Move rejection reasons and session construction errors
//!
//! # Game Rules
//!
//! - **Anchors** (`-1`): each one starts exactly one chain
//! - **Inert cells** (`0`): never part of any chain
//! - **Numbered cells** (`> 0`): must all be covered to complete the level
//! - **Growth**: a chain grows one cardinal step from its tip onto a free cell
//!   whose value is at least the tip value
//! - **Undo/Erase/Restart**: shrink a chain by one, to its anchor, or shrink all chains
//!
//! # Example
//!
//! ```
//! use cardinal_chains_core::{GameSession, Level, LevelCatalog, SessionState};
//! use cardinal_chains_types::{Direction, GameAction};
//!
//! let catalog = LevelCatalog::new(vec![Level::new(1, vec![vec![-1, 1, 2]])]);
//! let mut session = GameSession::new(catalog).unwrap();
//!
//! session.apply_action(GameAction::Move(Direction::East));
//! let outcome = session.apply_action(GameAction::Move(Direction::East));
//!
//! assert_eq!(outcome.completed_level, Some(0));
//! assert_eq!(session.advance(), SessionState::AllLevelsComplete);
//! ```

pub mod chain;
pub mod error;
pub mod level;
pub mod session;
pub mod snapshot;

pub use cardinal_chains_types as types;

// Re-export commonly used types for convenience
pub use chain::{Chain, ChainSet};
pub use error::{MoveRejection, SessionError};
pub use level::{is_numbered, Level, LevelCatalog};
pub use session::{ActionOutcome, GameSession, SessionState};
pub use snapshot::GameSnapshot;
