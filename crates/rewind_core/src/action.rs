//! User intents and the reducer that applies them.
//!
//! Actions are domain events, not side effects. [`reduce`] maps the current
//! state and one action to the next state; rejected moves and jumps leave
//! the state unchanged.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameState, PlayerSlot, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark.
    PlayMove(Position),
    /// Display an earlier or later snapshot.
    JumpTo(usize),
    /// Replace a display name.
    SetPlayerName(PlayerSlot, String),
    /// Flip the move list order.
    ToggleSortOrder,
}

/// Applies `action` to `state`.
#[instrument(skip(state), fields(current_move = state.current_move()))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::PlayMove(pos) => state.play_move(pos).unwrap_or_else(|e| {
            debug!(error = %e, "Move ignored");
            state.clone()
        }),
        Action::JumpTo(move_number) => state.jump_to(move_number).unwrap_or_else(|e| {
            debug!(error = %e, "Jump ignored");
            state.clone()
        }),
        Action::SetPlayerName(slot, name) => state.set_player_name(slot, name),
        Action::ToggleSortOrder => state.toggle_sort_order(),
    }
}

/// Owns the live [`GameState`].
///
/// The renderer reads [`Store::state`]; input handlers call
/// [`Store::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: GameState,
}

impl Store {
    /// Store holding `state`.
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs `action` through [`reduce`] and keeps the result.
    ///
    /// Returns whether the state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }

        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&next)
        {
            for violation in &violations {
                warn!(%violation, "State check failed after dispatch");
            }
        }

        debug!(
            current_move = next.current_move(),
            history_len = next.history().len(),
            "State updated"
        );
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reports_change() {
        let mut store = Store::default();
        assert!(store.dispatch(Action::PlayMove(Position::Center)));
        assert!(!store.dispatch(Action::PlayMove(Position::Center)));
        assert_eq!(store.state().history().len(), 2);
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut store = Store::default();
        store.dispatch(Action::PlayMove(Position::Center));
        let before = store.state().clone();

        assert!(!store.dispatch(Action::JumpTo(1)));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_out_of_range_jump_is_noop() {
        let state = GameState::new();
        assert_eq!(reduce(&state, Action::JumpTo(5)), state);
    }

    #[test]
    fn test_set_empty_name() {
        let mut store = Store::default();
        store.dispatch(Action::SetPlayerName(PlayerSlot::Player2, "Bo".into()));
        assert!(store.dispatch(Action::SetPlayerName(PlayerSlot::Player2, String::new())));
        assert_eq!(store.state().players().player2, "");
    }
}
