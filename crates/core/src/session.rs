//! Game session - level progression on top of the chain engine
//!
//! The session owns the level catalog, the chains of the level in play and the
//! chain selector. Drivers feed it one [`GameAction`] per turn and read the
//! resulting state back through accessors or a [`GameSnapshot`].
//!
//! State machine:
//!
//! ```text
//! Playing(i) --move completes level--> LevelComplete(i)
//! LevelComplete(i) --advance--> Playing(i + 1) | AllLevelsComplete
//! any --quit--> GameOver
//! ```
//!
//! `GameOver` and `AllLevelsComplete` accept no further actions.

use tracing::{debug, info, warn};

use crate::chain::{Chain, ChainSet};
use crate::error::SessionError;
use crate::level::{Level, LevelCatalog};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Position};

/// Where the session is in its level progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Playing(usize),
    LevelComplete(usize),
    GameOver,
    AllLevelsComplete,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::GameOver | SessionState::AllLevelsComplete)
    }
}

/// Result of applying one driver action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    /// The chains, the selector or the session state changed.
    pub changed: bool,
    /// Set when this action completed the level at the given index.
    pub completed_level: Option<usize>,
}

impl ActionOutcome {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            completed_level: None,
        }
    }
}

/// Single-player game across an ordered list of levels.
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: LevelCatalog,
    state: SessionState,
    level_index: usize,
    chains: ChainSet,
    current_chain: usize,
}

impl GameSession {
    /// Start at the first level
    pub fn new(catalog: LevelCatalog) -> Result<Self, SessionError> {
        Self::with_start_level(catalog, 0)
    }

    /// Start at level `index` (0-based position in the catalog)
    pub fn with_start_level(catalog: LevelCatalog, index: usize) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let level = catalog
            .get(index)
            .ok_or(SessionError::StartLevelOutOfRange {
                index,
                count: catalog.len(),
            })?;
        let chains = init_level(level, index);

        Ok(Self {
            catalog,
            state: SessionState::Playing(index),
            level_index: index,
            chains,
            current_chain: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// The level in play (the last one played once the session is terminal)
    pub fn level(&self) -> &Level {
        // level_index is validated on every assignment
        &self.catalog[self.level_index]
    }

    pub fn chains(&self) -> &ChainSet {
        &self.chains
    }

    pub fn current_chain(&self) -> usize {
        self.current_chain
    }

    pub fn selected_chain(&self) -> Option<&Chain> {
        self.chains.get(self.current_chain)
    }

    /// Tip of the selected chain, `None` for levels without anchors
    pub fn current_tip(&self) -> Option<Position> {
        self.selected_chain().map(Chain::tip)
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Coverage check for the level in play
    pub fn is_completed(&self) -> bool {
        self.chains.is_completed(self.level())
    }

    fn is_playing(&self) -> bool {
        matches!(self.state, SessionState::Playing(_))
    }

    /// Grow the selected chain. Returns true when the chain grew.
    ///
    /// A successful move that covers the last numbered cell switches the
    /// session to `LevelComplete`.
    pub fn move_chain(&mut self, direction: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }
        let level = &self.catalog[self.level_index];
        if !self.chains.try_move(level, self.current_chain, direction) {
            return false;
        }
        if self.chains.is_completed(level) {
            info!(
                level = level.number(),
                index = self.level_index,
                "level completed"
            );
            self.state = SessionState::LevelComplete(self.level_index);
        }
        true
    }

    /// Cancel the last move of the selected chain
    pub fn undo_last(&mut self) -> bool {
        self.is_playing() && self.chains.undo_last(self.current_chain)
    }

    /// Shrink the selected chain back to its anchor
    pub fn erase(&mut self) -> bool {
        self.is_playing() && self.chains.erase(self.current_chain) > 0
    }

    /// Shrink every chain back to its anchor
    pub fn restart_level(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let removed = self.chains.restart();
        debug!(removed, "level restarted");
        removed > 0
    }

    /// Cycle the selector to the next chain, wrapping around
    pub fn select_next_chain(&mut self) -> bool {
        if !self.is_playing() || self.chains.len() < 2 {
            return false;
        }
        self.current_chain = (self.current_chain + 1) % self.chains.len();
        true
    }

    /// Give up. The session stops accepting actions.
    pub fn quit(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        info!(index = self.level_index, "player quit");
        self.state = SessionState::GameOver;
        true
    }

    /// Leave the current level.
    ///
    /// From `LevelComplete(i)` this loads level `i + 1` or finishes the game.
    /// Advancing from `Playing` skips an unfinished level, which ends the game.
    pub fn advance(&mut self) -> SessionState {
        match self.state {
            SessionState::LevelComplete(index) => {
                let next = index + 1;
                match self.catalog.get(next) {
                    Some(level) => {
                        self.chains = init_level(level, next);
                        self.level_index = next;
                        self.current_chain = 0;
                        self.state = SessionState::Playing(next);
                    }
                    None => {
                        info!("all levels complete");
                        self.state = SessionState::AllLevelsComplete;
                    }
                }
            }
            SessionState::Playing(index) => {
                warn!(index, "advanced past an unfinished level");
                self.state = SessionState::GameOver;
            }
            SessionState::GameOver | SessionState::AllLevelsComplete => {}
        }
        self.state
    }

    /// Dispatch one driver command
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => {
                let changed = self.move_chain(direction);
                let completed_level = match self.state {
                    SessionState::LevelComplete(index) if changed => Some(index),
                    _ => None,
                };
                ActionOutcome {
                    changed,
                    completed_level,
                }
            }
            GameAction::Undo => ActionOutcome::changed(self.undo_last()),
            GameAction::Erase => ActionOutcome::changed(self.erase()),
            GameAction::Restart => ActionOutcome::changed(self.restart_level()),
            GameAction::NextChain => ActionOutcome::changed(self.select_next_chain()),
            GameAction::Quit => ActionOutcome::changed(self.quit()),
        }
    }

    /// Borrowed read-only view for renderers
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            level: self.level(),
            level_index: self.level_index,
            level_count: self.catalog.len(),
            chains: &self.chains,
            current_chain: self.current_chain,
            state: self.state,
        }
    }
}

fn init_level(level: &Level, index: usize) -> ChainSet {
    let chains = ChainSet::initialize(level);
    if chains.is_empty() {
        warn!(level = level.number(), "level has no anchors");
    }
    info!(
        level = level.number(),
        index,
        chains = chains.len(),
        "level loaded"
    );
    chains
}
