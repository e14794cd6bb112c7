//! Chain engine - growth, undo and coverage rules for the chains of one level
//!
//! Every anchor cell of a level owns exactly one chain. A chain starts with
//! just its anchor and grows one cardinal step at a time from its tip:
//!
//! - the step must stay inside the grid (rows may be ragged)
//! - the destination must not belong to any chain, including this one
//! - the destination must not be inert (`0`)
//! - the destination value must be at least the tip value; anchors hold `-1`,
//!   so the first step off an anchor always passes this check
//!
//! The chain set never holds a reference to its level. Operations that need
//! cell values take the level as an argument, which lets the session own both
//! the catalog and the chains without self-borrowing.

use tracing::debug;

use crate::error::MoveRejection;
use crate::level::{is_numbered, Level};
use crate::types::{Direction, Position, INERT};

/// An ordered path of positions starting at an anchor. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    positions: Vec<Position>,
}

impl Chain {
    /// Create a length-1 chain sitting on its anchor
    pub fn new(anchor: Position) -> Self {
        Self {
            positions: vec![anchor],
        }
    }

    pub fn anchor(&self) -> Position {
        self.positions[0]
    }

    /// The most recently added position
    pub fn tip(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    fn push(&mut self, pos: Position) {
        self.positions.push(pos);
    }

    /// Drop the tip unless only the anchor is left
    fn pop(&mut self) -> Option<Position> {
        if self.positions.len() > 1 {
            self.positions.pop()
        } else {
            None
        }
    }

    fn truncate_to_anchor(&mut self) -> usize {
        let removed = self.positions.len() - 1;
        self.positions.truncate(1);
        removed
    }
}

/// All chains of the level in play. The chain count is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSet {
    chains: Vec<Chain>,
}

impl ChainSet {
    /// One chain per anchor, in row-major anchor order
    pub fn initialize(level: &Level) -> Self {
        let chains: Vec<Chain> = level.anchors().map(Chain::new).collect();
        debug!(
            level = level.number(),
            chains = chains.len(),
            "initialized chains"
        );
        Self { chains }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter()
    }

    /// Index of the chain covering `pos`, if any
    pub fn occupant(&self, pos: Position) -> Option<usize> {
        self.chains.iter().position(|chain| chain.contains(pos))
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupant(pos).is_some()
    }

    /// Validate a move without applying it.
    ///
    /// Returns the destination on success.
    pub fn check_move(
        &self,
        level: &Level,
        index: usize,
        direction: Direction,
    ) -> Result<Position, MoveRejection> {
        let chain = self.chains.get(index).ok_or(MoveRejection::UnknownChain {
            index,
            count: self.chains.len(),
        })?;

        let tip = chain.tip();
        let next = tip.step(direction).ok_or(MoveRejection::OutOfBounds)?;
        let next_value = level.get(next).ok_or(MoveRejection::OutOfBounds)?;

        if self.is_occupied(next) {
            return Err(MoveRejection::Occupied(next));
        }

        if next_value == INERT {
            return Err(MoveRejection::Inert(next));
        }

        // A tip outside the grid cannot happen for chains built by this set.
        let tip_value = level.get(tip).ok_or(MoveRejection::OutOfBounds)?;
        if next_value < tip_value {
            return Err(MoveRejection::Descending {
                at: next,
                tip: tip_value,
                next: next_value,
            });
        }

        Ok(next)
    }

    /// Grow chain `index` one step towards `direction`.
    ///
    /// Illegal moves leave the set untouched and return false.
    pub fn try_move(&mut self, level: &Level, index: usize, direction: Direction) -> bool {
        match self.check_move(level, index, direction) {
            Ok(next) => {
                self.chains[index].push(next);
                debug!(chain = index, ?next, "chain extended");
                true
            }
            Err(reason) => {
                debug!(chain = index, dir = direction.as_str(), %reason, "move rejected");
                false
            }
        }
    }

    /// Remove the tip of chain `index`. Returns false when nothing was removed.
    pub fn undo_last(&mut self, index: usize) -> bool {
        self.chains
            .get_mut(index)
            .and_then(Chain::pop)
            .is_some()
    }

    /// Shrink chain `index` back to its anchor. Returns the number of removed positions.
    pub fn erase(&mut self, index: usize) -> usize {
        self.chains
            .get_mut(index)
            .map(Chain::truncate_to_anchor)
            .unwrap_or(0)
    }

    /// Shrink every chain back to its anchor. Returns the number of removed positions.
    pub fn restart(&mut self) -> usize {
        self.chains.iter_mut().map(Chain::truncate_to_anchor).sum()
    }

    /// True iff every numbered cell of `level` is covered by some chain
    pub fn is_completed(&self, level: &Level) -> bool {
        level.numbered_cells().all(|pos| self.is_occupied(pos))
    }

    /// Number of numbered cells still uncovered
    pub fn remaining(&self, level: &Level) -> usize {
        level
            .cells()
            .filter(|&(pos, value)| is_numbered(value) && !self.is_occupied(pos))
            .count()
    }
}
