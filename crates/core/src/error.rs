//! Error and rejection types for the engine and session.

use thiserror::Error;

use crate::types::Position;

/// Why a move was refused. Rejections are ordinary gameplay input, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("chain {index} does not exist ({count} chains)")]
    UnknownChain { index: usize, count: usize },
    #[error("step leaves the grid")]
    OutOfBounds,
    #[error("cell {0:?} already belongs to a chain")]
    Occupied(Position),
    #[error("cell {0:?} is inert")]
    Inert(Position),
    #[error("value {next} at {at:?} is below the tip value {tip}")]
    Descending { at: Position, tip: i32, next: i32 },
}

/// Session construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("level catalog is empty")]
    EmptyCatalog,
    #[error("start level {index} is out of range ({count} levels)")]
    StartLevelOutOfRange { index: usize, count: usize },
}
