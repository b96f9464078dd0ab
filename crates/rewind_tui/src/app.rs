//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rewind_core::{Action, GameState, MoveEntry, PlayerSlot, Position, Store, move_list};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::input::{digit_position, move_cursor};
use crate::ui::{Regions, hit, visible_offset};

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
    /// Name field for X.
    Player1Name,
    /// Name field for O.
    Player2Name,
}

impl Focus {
    /// The following widget, wrapping around.
    pub fn next(self) -> Self {
        Self::iter()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// The preceding widget, wrapping around.
    pub fn prev(self) -> Self {
        Self::iter()
            .rev()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Name slot edited by this widget, if it is a name field.
    pub fn slot(self) -> Option<PlayerSlot> {
        match self {
            Focus::Player1Name => Some(PlayerSlot::Player1),
            Focus::Player2Name => Some(PlayerSlot::Player2),
            Focus::Board | Focus::Moves => None,
        }
    }

    /// Title shown on the widget.
    pub fn title(self) -> &'static str {
        match self {
            Focus::Board => "Board",
            Focus::Moves => "Moves",
            Focus::Player1Name => "Player 1",
            Focus::Player2Name => "Player 2",
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    store: Store,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `state`.
    pub fn new(state: GameState) -> Self {
        let selected_move = state.current_move();
        Self {
            store: Store::new(state),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_move,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused widget.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move number highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Position of the selected move within `entries`.
    pub fn selected_index(&self, entries: &[MoveEntry]) -> usize {
        entries
            .iter()
            .position(|e| *e.move_number() == self.selected_move)
            .unwrap_or(0)
    }

    /// Sends `action` to the store and keeps the list selection valid.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.store.dispatch(action);
        if changed {
            let last = self.state().history().len() - 1;
            if self.selected_move > last {
                self.selected_move = last;
            }
        }
        changed
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            debug!("Quit requested");
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        if let Some(slot) = self.focus.slot() {
            self.handle_name_key(slot, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('s') => {
                self.dispatch(Action::ToggleSortOrder);
            }
            _ if self.focus == Focus::Board => self.handle_board_key(key.code),
            _ => self.handle_moves_key(key.code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let entries = move_list(self.state());
        let idx = self.selected_index(&entries);
        match code {
            KeyCode::Up => {
                if let Some(entry) = idx.checked_sub(1).and_then(|i| entries.get(i)) {
                    self.selected_move = *entry.move_number();
                }
            }
            KeyCode::Down => {
                if let Some(entry) = entries.get(idx + 1) {
                    self.selected_move = *entry.move_number();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = entries.get(idx) {
                    self.jump(entry);
                }
            }
            _ => {}
        }
    }

    fn handle_name_key(&mut self, slot: PlayerSlot, key: KeyEvent) {
        let mut name = self.state().players().get(slot).to_string();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::Board;
                return;
            }
            KeyCode::Backspace => {
                if name.pop().is_none() {
                    return;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => name.push(c),
            _ => return,
        }
        self.dispatch(Action::SetPlayerName(slot, name));
    }

    /// Handles one mouse event against the layout of `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (event.column, event.row);
        let regions = Regions::new(area);

        if let Some(pos) = regions.cell_at(x, y) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos);
        } else if hit(regions.sort_button, x, y) {
            self.dispatch(Action::ToggleSortOrder);
        } else if hit(regions.player1, x, y) {
            self.focus = Focus::Player1Name;
        } else if hit(regions.player2, x, y) {
            self.focus = Focus::Player2Name;
        } else if hit(regions.moves, x, y) {
            self.focus = Focus::Moves;
            let inner = regions.moves_inner();
            if !hit(inner, x, y) {
                return;
            }
            let entries = move_list(self.state());
            let offset = visible_offset(self.selected_index(&entries), inner.height);
            let row = usize::from(y - inner.y) + offset;
            if let Some(entry) = entries.get(row) {
                self.selected_move = *entry.move_number();
                self.jump(entry);
            }
        } else if hit(regions.board, x, y) {
            self.focus = Focus::Board;
        }
    }

    fn play(&mut self, pos: Position) {
        if self.dispatch(Action::PlayMove(pos)) {
            self.selected_move = self.state().current_move();
        }
    }

    fn jump(&mut self, entry: &MoveEntry) {
        // The current entry is plain text, not a jump target.
        if !*entry.is_current() {
            self.dispatch(Action::JumpTo(*entry.move_number()));
        }
    }
}
