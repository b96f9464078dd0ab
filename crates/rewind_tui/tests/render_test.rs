//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use rewind_core::{GameState, PlayerNames, SortOrder};
use rewind_tui::{App, ui};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn screen(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

#[test]
fn test_fresh_game_screen() {
    let app = App::new(GameState::new());
    let lines = screen(&app);

    assert!(contains(&lines, "Rewind - Tic Tac Toe"));
    assert!(contains(&lines, "next player: X"));
    assert!(contains(&lines, "next turn: X"));
    assert!(contains(&lines, "Go to game start"));
    assert!(contains(&lines, "order: ascending"));
    assert!(contains(&lines, "enter/1-9 play"));
}

#[test]
fn test_winner_screen() {
    let mut app = App::new(GameState::new());
    press(&mut app, "15283");
    let lines = screen(&app);

    assert!(contains(&lines, "winner: X"));
    assert!(contains(&lines, "You are at move #5"));
    assert!(contains(&lines, "Go to move #4"));
    assert!(contains(&lines, "game over"));
}

#[test]
fn test_names_and_descending_order() {
    let state = GameState::with_settings(PlayerNames::new("Ana", "Bo"), SortOrder::Descending);
    let mut app = App::new(state);
    press(&mut app, "1");
    let lines = screen(&app);

    assert!(contains(&lines, "next turn: Bo"));
    assert!(contains(&lines, "order: descending"));

    let current = lines
        .iter()
        .position(|l| l.contains("You are at move #1"))
        .unwrap();
    let start = lines
        .iter()
        .position(|l| l.contains("Go to game start"))
        .unwrap();
    assert!(current < start);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = App::new(GameState::new());
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}
