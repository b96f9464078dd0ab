//! Game state and its transitions.
//!
//! Every transition borrows the current [`GameState`] and returns a new one.
//! A state that has been handed to the renderer is never changed in place.

use crate::rules::{WinningLine, winning_line};
use crate::{Board, CurrentMoveOutOfRange, History, JumpError, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two name fields. Player 1 plays X, player 2 plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSlot {
    /// Plays X.
    #[display("player1")]
    Player1,
    /// Plays O.
    #[display("player2")]
    Player2,
}

impl PlayerSlot {
    /// The slot controlling `player`'s marks.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => PlayerSlot::Player1,
            Player::O => PlayerSlot::Player2,
        }
    }

    /// The mark this slot plays.
    pub fn player(self) -> Player {
        match self {
            PlayerSlot::Player1 => Player::X,
            PlayerSlot::Player2 => Player::O,
        }
    }
}

/// Free-text display names. Independent of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name shown for X.
    pub player1: String,
    /// Name shown for O.
    pub player2: String,
}

impl PlayerNames {
    /// Creates names for both slots.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Stored name for `slot`, possibly empty.
    pub fn get(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }

    /// Name to show for `player`, falling back to the bare symbol when the
    /// field is empty.
    pub fn display_name(&self, player: Player) -> String {
        let name = self.get(PlayerSlot::for_player(player));
        if name.is_empty() {
            player.to_string()
        } else {
            name.to_string()
        }
    }
}

/// Presentation order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Latest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Flips the direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether game start is listed first.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Complete state of one session.
///
/// Deserialization rejects a `current_move` that does not index the history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredGameState")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    pub(crate) players: PlayerNames,
    pub(crate) sort_order: SortOrder,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StoredGameState {
    history: History,
    current_move: usize,
    players: PlayerNames,
    sort_order: SortOrder,
}

impl TryFrom<StoredGameState> for GameState {
    type Error = CurrentMoveOutOfRange;

    fn try_from(stored: StoredGameState) -> Result<Self, Self::Error> {
        if stored.current_move >= stored.history.len() {
            return Err(CurrentMoveOutOfRange {
                current_move: stored.current_move,
                len: stored.history.len(),
            });
        }
        Ok(Self {
            history: stored.history,
            current_move: stored.current_move,
            players: stored.players,
            sort_order: stored.sort_order,
        })
    }
}

impl GameState {
    /// Fresh game: one empty snapshot, move 0, ascending list, blank names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh game with preset names and list order.
    pub fn with_settings(players: PlayerNames, sort_order: SortOrder) -> Self {
        Self {
            players,
            sort_order,
            ..Self::default()
        }
    }

    /// Every snapshot played so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Display names.
    pub fn players(&self) -> &PlayerNames {
        &self.players
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.current_move)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Whether X moves next from the displayed snapshot.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who moves next from the displayed snapshot.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Winning line on the displayed snapshot.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(self.current_board())
    }

    /// Name of the player to move, or their symbol if the name is blank.
    pub fn next_player_label(&self) -> String {
        self.players.display_name(self.next_player())
    }

    /// Plays the next mark at `pos` from the displayed snapshot.
    ///
    /// Snapshots after the current move are dropped before the new board is
    /// appended, and the new board becomes current.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the displayed board has a winner,
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&self, pos: Position) -> Result<Self, MoveError> {
        let board = self.current_board();
        if winning_line(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next_board = board.with_mark(pos, player);
        let history = self.history.branch(self.current_move, next_board);
        let current_move = history.len() - 1;
        debug!(%player, current_move, "Move applied");

        Ok(Self {
            history,
            current_move,
            ..self.clone()
        })
    }

    /// Displays snapshot `move_number`. History is untouched.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `move_number` is not in the history.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, move_number: usize) -> Result<Self, JumpError> {
        if move_number >= self.history.len() {
            return Err(JumpError::OutOfRange {
                target: move_number,
                len: self.history.len(),
            });
        }
        Ok(Self {
            current_move: move_number,
            ..self.clone()
        })
    }

    /// Replaces one player's name, including with an empty string.
    pub fn set_player_name(&self, slot: PlayerSlot, name: impl Into<String>) -> Self {
        let mut players = self.players.clone();
        match slot {
            PlayerSlot::Player1 => players.player1 = name.into(),
            PlayerSlot::Player2 => players.player2 = name.into(),
        }
        Self {
            players,
            ..self.clone()
        }
    }

    /// Flips the move list order.
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_order: self.sort_order.toggle(),
            ..self.clone()
        }
    }
}
