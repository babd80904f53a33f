//! Tests for the console front-end with scripted input.

use crossgame_logic::Sign;
use crossgame_server::{Controller, InMemorySessionStore, SessionStore, run_console};
use std::io::Cursor;

fn play(script: &str) -> (Option<crossgame_logic::WinnerInfo>, String, Controller) {
    let mut controller = Controller::new(InMemorySessionStore::new());
    let mut output = Vec::new();
    let outcome = run_console(&mut controller, Cursor::new(script), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap(), controller)
}

#[test]
fn test_console_win() {
    let script = "Alice\nBob\n0 0\n1 1\n0 1\n0 2\n1 0\n2 0\n";
    let (outcome, output, controller) = play(script);

    let winner = outcome.expect("game finished");
    assert_eq!(winner.player().as_ref().unwrap().name(), "Bob");
    assert_eq!(winner.sign(), &Some(Sign::O));

    assert!(output.starts_with("New Game\nPlayer 1 enter the name:\nPlayer 2 enter the name:\n"));
    assert!(output.contains("Player - Alice with sign X please make a move (enter row column):"));
    assert!(output.contains("Player - Bob with sign O please make a move (enter row column):"));
    assert!(output.contains("Next move"));
    assert!(output.contains("X X O\nX O .\nO . .\n"));
    assert!(output.trim_end().ends_with("Player Bob wins with sign O"));

    // The finished session is closed.
    assert!(controller.store().is_empty());
}

#[test]
fn test_console_draw() {
    // X O X / X O O / O X X
    let script = "a\nb\n0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n";
    let (outcome, output, _) = play(script);

    let outcome = outcome.expect("game finished");
    assert!(*outcome.is_draw());
    assert!(outcome.player().is_none());
    assert!(output.trim_end().ends_with("Draw"));
}

#[test]
fn test_console_rejected_moves_are_retried() {
    let script = "Alice\nBob\n0 0\n0 0\n5 5\nnonsense\n1 1\n";
    let (outcome, output, controller) = play(script);

    assert!(outcome.is_none());
    assert!(output.contains("Cell 0:0 already has a value"));
    assert!(output.contains("Cell 5:5 is outside the 3x3 field"));
    assert!(output.contains("Please enter two numbers separated by a space"));
    assert!(output.trim_end().ends_with("Input closed, leaving the game"));

    // Bob kept the turn through every rejected move, then played 1 1.
    let id = controller.store().session_ids().pop().unwrap();
    let state = controller.get_status(&id).unwrap().unwrap();
    assert_eq!(*state.active_player().sign(), Sign::X);
    let placed = state.board().as_ref().unwrap().iter().flatten().filter(|c| !c.is_empty()).count();
    assert_eq!(placed, 2);
}

#[test]
fn test_console_input_closed_before_names() {
    let (outcome, output, controller) = play("Alice\n");
    assert!(outcome.is_none());
    assert_eq!(output, "New Game\nPlayer 1 enter the name:\nPlayer 2 enter the name:\n");
    assert_eq!(controller.store().len(), 1);
}
