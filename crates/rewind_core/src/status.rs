//! Values derived from a [`GameState`] for display.
//!
//! Nothing here is stored; it is recomputed from the state on every render.

use crate::rules::{check_winner, is_draw};
use crate::{GameState, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("winner: {_0}")]
    Winner(Player),
    /// Full board, no line.
    #[display("draw")]
    Draw,
    /// Play continues.
    #[display("next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Evaluates the displayed board of `state`.
    pub fn of(state: &GameState) -> Self {
        let board = state.current_board();
        if let Some(player) = check_winner(board) {
            Status::Winner(player)
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::NextPlayer(state.next_player())
        }
    }

    /// Whether no further move can be played on this board.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into the history.
    move_number: usize,
    /// Text of the row.
    description: String,
    /// Whether this is the displayed move (shown as plain text, not a jump
    /// target).
    is_current: bool,
    /// Cell filled by this move; `None` for game start.
    placed_at: Option<Position>,
}

impl MoveEntry {
    /// `(row, col)` of the filled cell, zero-based.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.placed_at.map(|pos| (pos.row(), pos.col()))
    }
}

/// The move list in the state's sort order.
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let history = state.history();
    let current = state.current_move();
    let entry = |move_number: usize| {
        let is_current = move_number == current;
        let description = if move_number == 0 {
            "Go to game start".to_string()
        } else if is_current {
            format!("You are at move #{move_number}")
        } else {
            format!("Go to move #{move_number}")
        };
        MoveEntry {
            move_number,
            description,
            is_current,
            placed_at: history.placed_at(move_number),
        }
    };

    if state.sort_order().is_ascending() {
        (0..history.len()).map(entry).collect()
    } else {
        (0..history.len()).rev().map(entry).collect()
    }
}
