//! Current move invariant: the pointer stays inside the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CurrentMoveInBoundsInvariant;

impl Invariant<GameState> for CurrentMoveInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move() < state.history().len()
    }

    fn description() -> &'static str {
        "Current move points into the history"
    }
}
