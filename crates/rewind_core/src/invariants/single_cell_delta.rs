//! Single-cell delta invariant: each move fills exactly one empty square.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: the history starts from the empty board and each snapshot
/// differs from its predecessor in exactly one square, which went from
/// empty to a mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        let snapshots = state.history().snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            match before.changed_positions(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square of the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Player, Position};

    fn state_with(snapshots: Vec<Board>) -> GameState {
        GameState {
            history: History::from_snapshots(snapshots).unwrap(),
            ..GameState::new()
        }
    }

    #[test]
    fn test_played_game_holds() {
        let state = [4, 0, 8]
            .iter()
            .fold(GameState::new(), |s, i| s.play_move(Position::ALL[*i]).unwrap());
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let b1 = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleCellDeltaInvariant::holds(&state_with(vec![Board::new(), b1, b1])));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let b1 = Board::new().with_mark(Position::Center, Player::X);
        let b2 = b1.with_mark(Position::Center, Player::O);
        assert!(!SingleCellDeltaInvariant::holds(&state_with(vec![Board::new(), b1, b2])));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let b0 = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleCellDeltaInvariant::holds(&state_with(vec![b0])));
    }
}
