//! Board snapshots from game start to the latest move.

use crate::{Board, EmptyHistory, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered snapshots; index 0 is the empty board, index k the board after
/// move k.
///
/// A history is never empty. It only grows through [`History::branch`],
/// which returns a new history and leaves `self` as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// History of a fresh game: a single empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Builds a history from raw snapshots.
    ///
    /// Returns `None` for an empty sequence. No other checks are made; use
    /// the invariants to validate untrusted snapshots.
    pub fn from_snapshots(snapshots: Vec<Board>) -> Option<Self> {
        if snapshots.is_empty() {
            None
        } else {
            Some(Self { snapshots })
        }
    }

    /// Number of snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot after `move_number` moves.
    pub fn get(&self, move_number: usize) -> Option<&Board> {
        self.snapshots.get(move_number)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Board {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in move order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The cell filled by move `move_number`, if that move exists.
    pub fn placed_at(&self, move_number: usize) -> Option<Position> {
        if move_number == 0 {
            return None;
        }
        let before = self.snapshots.get(move_number - 1)?;
        let after = self.snapshots.get(move_number)?;
        match before.changed_positions(after).as_slice() {
            [pos] => Some(*pos),
            _ => None,
        }
    }

    /// Keeps snapshots `0..=at`, then appends `next`.
    ///
    /// Everything after `at` is discarded: playing from an earlier move
    /// replaces the old future rather than forking it.
    #[instrument(skip(self, next), fields(len = self.len()))]
    pub fn branch(&self, at: usize, next: Board) -> Self {
        let keep = (at + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(next);
        Self { snapshots }
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = EmptyHistory;

    fn try_from(snapshots: Vec<Board>) -> Result<Self, Self::Error> {
        Self::from_snapshots(snapshots).ok_or(EmptyHistory)
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), &Board::new());
        assert_eq!(history.placed_at(0), None);
    }

    #[test]
    fn test_branch_appends_at_end() {
        let history = History::new();
        let next = history
            .latest()
            .with_mark(Position::Center, Player::X);
        let grown = history.branch(0, next);

        assert_eq!(history.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.placed_at(1), Some(Position::Center));
    }

    #[test]
    fn test_branch_discards_future() {
        let b1 = Board::new().with_mark(Position::TopLeft, Player::X);
        let b2 = b1.with_mark(Position::Center, Player::O);
        let b3 = b2.with_mark(Position::TopRight, Player::X);
        let history = History::from_snapshots(vec![Board::new(), b1, b2, b3]).unwrap();

        let alt = b1.with_mark(Position::BottomLeft, Player::O);
        let branched = history.branch(1, alt);

        assert_eq!(branched.snapshots(), &[Board::new(), b1, alt]);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_from_snapshots_rejects_empty() {
        assert!(History::from_snapshots(Vec::new()).is_none());
        assert!(serde_json::from_str::<History>("[]").is_err());
    }
}
