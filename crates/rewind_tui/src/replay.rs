//! Headless replay of a move list.

use derive_more::{Display, Error};
use rewind_core::{Action, GameState, MoveEntry, Position, Status, Store, move_list};
use serde::Serialize;
use tracing::{info, instrument};

use crate::ui::entry_text;

/// A move token that names no cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown cell {token:?} (use 0-8 or a label such as \"center\")")]
pub struct ParseMovesError {
    /// The offending token.
    pub token: String,
}

/// Parses a comma-separated list of cells.
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ParseMovesError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| ParseMovesError {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Everything a render would show, as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Board as three text rows, `.` for empty.
    pub rows: [String; 3],
    /// Status line.
    pub status: String,
    /// Turn line.
    pub next_turn: String,
    /// Winning cells, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Full state.
    pub state: GameState,
}

impl ReplayReport {
    /// Captures `state`.
    pub fn of(state: &GameState) -> Self {
        Self {
            rows: state.current_board().rows(),
            status: Status::of(state).to_string(),
            next_turn: state.next_player_label(),
            winning_line: state.winning_line().map(|line| line.indices()),
            moves: move_list(state),
            state: state.clone(),
        }
    }

    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&format!("\n{}\nnext turn: {}\n\n", self.status, self.next_turn));
        for entry in &self.moves {
            let marker = if *entry.is_current() { '*' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", entry_text(entry)));
        }
        out
    }
}

/// Plays `moves` from `initial`, then optionally jumps.
///
/// Illegal moves are skipped exactly as the UI skips them.
#[instrument(skip(initial))]
pub fn replay(initial: GameState, moves: &[Position], jump: Option<usize>) -> GameState {
    let mut store = Store::new(initial);
    let applied = moves
        .iter()
        .filter(|pos| store.dispatch(Action::PlayMove(**pos)))
        .count();
    if let Some(target) = jump {
        store.dispatch(Action::JumpTo(target));
    }
    info!(applied, requested = moves.len(), "Replay finished");
    store.state().clone()
}
