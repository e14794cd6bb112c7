//! Snapshot of a game session for renderers
//!
//! Borrows the level and chains instead of copying them; one snapshot lives
//! for one frame.

use crate::chain::ChainSet;
use crate::level::Level;
use crate::session::SessionState;
use crate::types::Position;

/// Read-only view of a session, borrowed for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub level: &'a Level,
    pub level_index: usize,
    pub level_count: usize,
    pub chains: &'a ChainSet,
    pub current_chain: usize,
    pub state: SessionState,
}

impl<'a> GameSnapshot<'a> {
    /// Owning chain of a cell, if covered
    pub fn owner(&self, pos: Position) -> Option<usize> {
        self.chains.occupant(pos)
    }

    /// Tip of the selected chain
    pub fn current_tip(&self) -> Option<Position> {
        self.chains.get(self.current_chain).map(|chain| chain.tip())
    }

    pub fn is_current_tip(&self, pos: Position) -> bool {
        self.current_tip() == Some(pos)
    }

    /// Numbered cells still waiting for a chain
    pub fn remaining(&self) -> usize {
        self.chains.remaining(self.level)
    }
}
