//! Core types shared across the workspace
//! This module contains pure data types with no external dependencies

/// Cell value marking the fixed starting cell of one chain.
pub const ANCHOR: i32 = -1;
/// Cell value marking an unused cell. No chain may ever cover it.
pub const INERT: i32 = 0;

/// Number of distinct chain colours the terminal front-end cycles through.
pub const CHAIN_PALETTE_SIZE: usize = 6;

/// Grid coordinate. `row` grows downwards, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step towards `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds depend on the level grid and are checked by the caller.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// True when `other` is exactly one cardinal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// The four cardinal directions a chain can grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (row delta, column delta)
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Player commands understood by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    /// Cancel the last move of the selected chain.
    Undo,
    /// Shrink the selected chain back to its anchor.
    Erase,
    /// Shrink every chain back to its anchor.
    Restart,
    NextChain,
    Quit,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Undo => "undo",
            GameAction::Erase => "erase",
            GameAction::Restart => "restart",
            GameAction::NextChain => "nextChain",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_cardinal_deltas() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Direction::North), Some(Position::new(0, 1)));
        assert_eq!(p.step(Direction::South), Some(Position::new(2, 1)));
        assert_eq!(p.step(Direction::East), Some(Position::new(1, 2)));
        assert_eq!(p.step(Direction::West), Some(Position::new(1, 0)));
    }

    #[test]
    fn step_off_the_top_left_edge_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
    }

    #[test]
    fn every_step_lands_on_a_neighbour() {
        let p = Position::new(3, 3);
        for d in Direction::ALL {
            let q = p.step(d).unwrap();
            assert!(p.is_adjacent(q));
            assert!(!q.is_adjacent(q));
        }
    }

    #[test]
    fn move_actions_are_named_after_their_direction() {
        assert_eq!(GameAction::Move(Direction::North).as_str(), "north");
        assert_eq!(GameAction::NextChain.as_str(), "nextChain");
    }
}
