//! Rejected transitions.
//!
//! The store turns these into no-ops; they exist so callers and logs can
//! tell *why* nothing changed.

use crate::Position;
use derive_more::{Display, Error};

/// Error that can occur when playing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Error that can occur when jumping through the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The target move is not in the history.
    #[display("Move #{target} is out of range (history has {len} snapshots)")]
    OutOfRange {
        /// Requested move number.
        target: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// A history must hold at least the starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("History must contain at least one snapshot")]
pub struct EmptyHistory;

/// A stored session whose current move points past its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Current move #{current_move} is outside a history of {len} snapshots")]
pub struct CurrentMoveOutOfRange {
    /// Stored move pointer.
    pub current_move: usize,
    /// Number of stored snapshots.
    pub len: usize,
}
