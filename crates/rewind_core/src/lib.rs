//! Rewind core - tic-tac-toe with an immutable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] snapshots are `Copy` values over [`Square`]s.
//! - **Rules**: [`winning_line`] checks the eight fixed lines in priority
//!   order; [`is_draw`] detects a full board without one.
//! - **History**: [`History`] keeps every snapshot; playing from an earlier
//!   move discards the later ones.
//! - **State**: [`GameState`] transitions return new states.
//! - **Store**: [`Store`] owns the live state and applies [`Action`]s
//!   through the pure [`reduce`] function.
//!
//! # Example
//!
//! ```
//! use rewind_core::{Action, Position, Status, Store};
//!
//! let mut store = Store::default();
//! for idx in [0, 4, 1, 7, 2] {
//!     store.dispatch(Action::PlayMove(Position::from_index(idx).unwrap()));
//! }
//! assert_eq!(Status::of(store.state()).to_string(), "winner: X");
//! assert_eq!(store.state().winning_line().unwrap().indices(), [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{Action, Store, reduce};
pub use error::{CurrentMoveOutOfRange, EmptyHistory, JumpError, MoveError};
pub use history::History;
pub use position::Position;
pub use rules::{WinningLine, check_winner, is_draw, is_full, winning_line};
pub use state::{GameState, PlayerNames, PlayerSlot, SortOrder};
pub use status::{MoveEntry, Status, move_list};
pub use types::{Board, Player, Square};
