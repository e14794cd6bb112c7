//! Level module - immutable puzzle grids and the ordered catalog of them
//!
//! A level is a grid of signed cell values stored row by row. Rows may have
//! different lengths; a position is inside the grid only if its column is
//! below the length of its own row.
//! Coordinates: (row, col) with row 0 at the top and col 0 on the left.

use std::ops::Index;

use crate::types::{Position, ANCHOR, INERT};

/// One puzzle grid. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Level number as written in the level file (display only).
    number: i32,
    rows: Vec<Vec<i32>>,
}

impl Level {
    pub fn new(number: i32, rows: Vec<Vec<i32>>) -> Self {
        Self { number, rows }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or `None` past the last row
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Length of the longest row
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Value at `pos`, or `None` when `pos` is outside the (possibly ragged) grid
    pub fn get(&self, pos: Position) -> Option<i32> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, &value)| (Position::new(row, col), value))
        })
    }

    /// Anchor cells in row-major order
    pub fn anchors(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(|&(_, value)| value == ANCHOR)
            .map(|(pos, _)| pos)
    }

    /// Cells a chain has to cover before the level counts as completed
    pub fn numbered_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(|&(_, value)| is_numbered(value))
            .map(|(pos, _)| pos)
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors().count()
    }
}

/// True for cells that must be covered (neither anchor nor inert)
#[inline]
pub fn is_numbered(value: i32) -> bool {
    value != ANCHOR && value != INERT
}

/// Ordered collection of levels, indexed by position (not by level number).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at `index`. Callers bounds-check through the `Option`.
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Index<usize> for LevelCatalog {
    type Output = Level;

    fn index(&self, index: usize) -> &Level {
        &self.levels[index]
    }
}

impl From<Vec<Level>> for LevelCatalog {
    fn from(levels: Vec<Level>) -> Self {
        Self::new(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Level {
        Level::new(7, vec![vec![-1, 1, 2], vec![0, 3], vec![0, 0, 5, 6]])
    }

    #[test]
    fn ragged_rows_bound_each_row_separately() {
        let level = sample();
        assert_eq!(level.row_count(), 3);
        assert_eq!(level.row_len(1), Some(2));
        assert_eq!(level.max_row_len(), 4);

        assert_eq!(level.get(Position::new(1, 1)), Some(3));
        assert_eq!(level.get(Position::new(1, 2)), None);
        assert_eq!(level.get(Position::new(2, 3)), Some(6));
        assert_eq!(level.get(Position::new(3, 0)), None);
    }

    #[test]
    fn cells_are_row_major() {
        let level = sample();
        let order: Vec<Position> = level.cells().map(|(p, _)| p).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order.len(), 9);
    }

    #[test]
    fn numbered_cells_skip_anchors_and_inert_cells() {
        let level = sample();
        let numbered: Vec<i32> = level
            .numbered_cells()
            .map(|p| level.get(p).unwrap())
            .collect();
        assert_eq!(numbered, vec![1, 2, 3, 5, 6]);
        assert_eq!(level.anchor_count(), 1);
    }

    #[test]
    fn catalog_access_is_bounds_checked() {
        let catalog = LevelCatalog::new(vec![sample()]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).map(Level::number), Some(7));
        assert!(catalog.get(1).is_none());
        assert!(LevelCatalog::default().is_empty());
    }
}
