//! Stateless UI rendering.
//!
//! [`Regions`] is the single source of screen geometry: drawing and mouse
//! hit-testing both derive it from the terminal area, so a click always
//! lands on what was drawn there.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_core::{GameState, MoveEntry, Position, Square, Status, move_list};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BOARD_PANE_WIDTH: u16 = GRID_WIDTH + 6;

/// Screen areas for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// Grid inside the board pane.
    pub grid: Rect,
    /// One rect per cell, row-major.
    pub cells: [Rect; 9],
    /// Status box.
    pub status: Rect,
    /// Sort order button.
    pub sort_button: Rect,
    /// Name field for X.
    pub player1: Rect,
    /// Name field for O.
    pub player2: Rect,
    /// Turn line.
    pub turn: Rect,
    /// Bordered move list.
    pub moves: Rect,
    /// Key help line.
    pub help: Rect,
}

impl Regions {
    /// Lays out `area`.
    pub fn new(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(0)])
            .split(outer[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Sort button
                Constraint::Length(3), // Player 1
                Constraint::Length(3), // Player 2
                Constraint::Length(1), // Turn
                Constraint::Min(3),    // Moves
            ])
            .split(body[1]);

        let board_inner = Block::default().borders(Borders::ALL).inner(body[0]);
        let grid = center_rect(board_inner, GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = grid.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
        });

        Self {
            title: outer[0],
            board: body[0],
            grid,
            cells,
            status: info[0],
            sort_button: info[1],
            player1: info[2],
            player2: info[3],
            turn: info[4],
            moves: info[5],
            help: outer[2],
        }
    }

    /// The cell under screen coordinate `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| hit(self.cells[pos.to_index()], x, y))
    }

    /// Rows available for move list entries.
    pub fn moves_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }
}

/// Whether `(x, y)` falls inside `rect`.
pub fn hit(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// First visible list row so that `selected` stays on screen.
pub fn visible_offset(selected: usize, height: u16) -> usize {
    let height = usize::from(height.max(1));
    (selected + 1).saturating_sub(height)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = Regions::new(frame.area());
    let state = app.state();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, app);
    draw_status(frame, regions.status, state);
    draw_sort_button(frame, regions.sort_button, state);
    draw_name_field(frame, regions.player1, app, Focus::Player1Name);
    draw_name_field(frame, regions.player2, app, Focus::Player2Name);

    let turn = Paragraph::new(format!("next turn: {}", state.next_player_label()))
        .style(Style::default().fg(Color::White));
    frame.render_widget(turn, regions.turn);

    draw_moves(frame, &regions, app);

    let help_text = if Status::of(state).is_over() {
        "game over  tab to moves and pick one to rewind  s sort  q quit"
    } else {
        "arrows move  enter/1-9 play  tab focus  s sort  q quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, regions: &Regions, app: &App) {
    let board_focused = app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .border_style(focus_style(board_focused));
    frame.render_widget(block, regions.board);

    let lines: Vec<Line> = (0..GRID_HEIGHT)
        .map(|y| {
            if y % (CELL_HEIGHT + 1) == CELL_HEIGHT {
                Line::from("───────┼───────┼───────")
            } else {
                Line::from("       │       │       ")
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)),
        regions.grid,
    );

    let state = app.state();
    let board = state.current_board();
    let line = state.winning_line();

    for pos in Position::ALL {
        let (symbol, mut style) = match board.get(pos) {
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(player) => {
                let color = match player {
                    rewind_core::Player::X => Color::Blue,
                    rewind_core::Player::O => Color::Red,
                };
                (
                    player.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
        };

        if line.is_some_and(|l| l.contains(pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if board_focused && pos == app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let text = vec![Line::from(""), Line::from(symbol)];
        let cell = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(cell, regions.cells[pos.to_index()]);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let status = Status::of(state);
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Yellow,
        Status::NextPlayer(_) => Color::White,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(paragraph, area);
}

fn draw_sort_button(frame: &mut Frame, area: Rect, state: &GameState) {
    let label = if state.sort_order().is_ascending() {
        "[ order: ascending ↑ ]"
    } else {
        "[ order: descending ↓ ]"
    };
    let paragraph = Paragraph::new(label)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_name_field(frame: &mut Frame, area: Rect, app: &App, field: Focus) {
    let Some(slot) = field.slot() else {
        return;
    };
    let focused = app.focus() == field;
    let name = app.state().players().get(slot);
    let title = format!(" {} ({}) ", field.title(), slot.player());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(focus_style(focused));
    let inner = block.inner(area);

    let paragraph = if name.is_empty() && !focused {
        Paragraph::new(Span::styled(
            slot.player().to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(name.to_string())
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = u16::try_from(name.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(offset).min(inner.right() - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

/// Text of a move list row, with the 1-based cell location.
pub fn entry_text(entry: &MoveEntry) -> String {
    match entry.location() {
        Some((row, col)) => format!("{} (row {}, col {})", entry.description(), row + 1, col + 1),
        None => entry.description().clone(),
    }
}

fn draw_moves(frame: &mut Frame, regions: &Regions, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Moves ")
        .border_style(focus_style(focused));
    let inner = regions.moves_inner();

    let entries = move_list(app.state());
    let selected = app.selected_index(&entries);
    let offset = visible_offset(selected, inner.height);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(usize::from(inner.height))
        .map(|(idx, entry)| {
            let text = entry_text(entry);
            let mut line = if *entry.is_current() {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
                ])
            } else {
                Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        text,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ])
            };
            if focused && idx == selected {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), regions.moves);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}
