//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold after every transition.
//! The store checks them in debug builds; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod current_move;
pub mod single_cell_delta;

pub use alternating_turn::AlternatingTurnInvariant;
pub use current_move::CurrentMoveInBoundsInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// Every invariant of a game session.
pub type GameInvariants = (
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
    CurrentMoveInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, History, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = [0, 4, 2]
            .iter()
            .fold(GameState::new(), |s, i| s.play_move(Position::ALL[*i]).unwrap());
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Two marks appear at once, both O, and the pointer is past the end.
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O);
        let state = GameState {
            history: History::from_snapshots(vec![Board::new(), board]).unwrap(),
            current_move: 7,
            ..GameState::new()
        };

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations[2].to_string().starts_with("invariant violated: "));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SingleCellDeltaInvariant, CurrentMoveInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
