//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: move k places X when k is odd and O when k is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let expected = Square::Occupied(Player::to_move_after(k));
                before
                    .changed_positions(after)
                    .iter()
                    .all(|pos| after.get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
