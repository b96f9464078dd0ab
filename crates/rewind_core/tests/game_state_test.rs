//! Tests for game state transitions through the public API.

use rewind_core::{
    Action, Board, GameState, Player, PlayerSlot, Position, SortOrder, Status, Store, move_list,
    winning_line,
};

fn pos(idx: usize) -> Position {
    Position::from_index(idx).unwrap()
}

fn store_after(moves: &[usize]) -> Store {
    let mut store = Store::default();
    for idx in moves {
        store.dispatch(Action::PlayMove(pos(*idx)));
    }
    store
}

#[test]
fn test_top_row_win() {
    let store = store_after(&[0, 4, 1, 7, 2]);
    let line = winning_line(store.state().current_board()).unwrap();

    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(line.player, Player::X);
    assert_eq!(Status::of(store.state()).to_string(), "winner: X");
}

#[test]
fn test_full_board_draw() {
    use Player::{O, X};
    // X O X / X O O / O X X
    let board = [X, O, X, X, O, O, O, X, X]
        .iter()
        .enumerate()
        .fold(Board::new(), |b, (i, p)| b.with_mark(pos(i), *p));

    assert_eq!(winning_line(&board), None);
    assert!(rewind_core::is_draw(&board));

    let store = store_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(store.state().current_board(), &board);
    assert_eq!(Status::of(store.state()).to_string(), "draw");
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut store = store_after(&[0, 4, 1, 7, 2]);
    let before = store.state().clone();

    assert!(!store.dispatch(Action::PlayMove(pos(8))));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut store = store_after(&[4]);
    let before = store.state().clone();

    assert!(!store.dispatch(Action::PlayMove(pos(4))));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_jump_back_and_branch() {
    let mut store = store_after(&[0, 4, 1, 7]);
    assert!(store.dispatch(Action::JumpTo(2)));
    assert_eq!(store.state().history().len(), 5);
    assert!(store.state().x_is_next());

    assert!(store.dispatch(Action::PlayMove(pos(8))));
    let state = store.state();
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.current_move(), 3);
    assert!(state.current_board().is_empty(pos(7)));
    assert_eq!(
        state.current_board().get(pos(8)),
        rewind_core::Square::Occupied(Player::X)
    );
}

#[test]
fn test_turn_display_uses_names() {
    let mut store = Store::default();
    store.dispatch(Action::SetPlayerName(PlayerSlot::Player1, "Ana".into()));
    assert!(store.state().x_is_next());
    assert_eq!(store.state().next_player_label(), "Ana");

    store.dispatch(Action::PlayMove(pos(0)));
    assert_eq!(store.state().next_player_label(), "O");

    store.dispatch(Action::SetPlayerName(PlayerSlot::Player1, String::new()));
    store.dispatch(Action::JumpTo(0));
    assert_eq!(store.state().next_player_label(), "X");
}

#[test]
fn test_sort_toggle_reverses_list_only() {
    let mut store = store_after(&[0, 4]);
    let history = store.state().history().clone();

    store.dispatch(Action::ToggleSortOrder);
    assert_eq!(store.state().sort_order(), SortOrder::Descending);
    assert_eq!(store.state().history(), &history);
    assert_eq!(store.state().current_move(), 2);

    let numbers: Vec<_> = move_list(store.state())
        .iter()
        .map(|e| *e.move_number())
        .collect();
    assert_eq!(numbers, [2, 1, 0]);
}

#[test]
fn test_with_settings() {
    let state = GameState::with_settings(
        rewind_core::PlayerNames::new("Ana", "Bo"),
        SortOrder::Descending,
    );
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.players().get(PlayerSlot::Player2), "Bo");
    assert_eq!(state.sort_order(), SortOrder::Descending);
}

#[test]
fn test_state_serializes() {
    let store = store_after(&[4]);
    let json = serde_json::to_value(store.state()).unwrap();
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["sort_order"], "ascending");
    assert_eq!(json["history"].as_array().unwrap().len(), 2);

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(&back, store.state());
}

#[test]
fn test_state_rejects_current_move_past_history() {
    let mut json = serde_json::to_value(GameState::new()).unwrap();
    json["current_move"] = 7.into();

    let err = serde_json::from_value::<GameState>(json.clone()).unwrap_err();
    assert!(err.to_string().contains("Current move #7"));

    json["current_move"] = 0.into();
    let state: GameState = serde_json::from_value(json).unwrap();
    let next = state.play_move(Position::Center).unwrap();
    assert_eq!(next.current_board().get(Position::Center), rewind_core::Square::Occupied(Player::X));
}
