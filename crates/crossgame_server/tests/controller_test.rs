//! Tests for the session controller.

use crossgame_logic::{Cell, GameErrorKind, GameStateSnapshot, Sign};
use crossgame_server::{Controller, InMemorySessionStore, SessionStore};

fn controller() -> Controller {
    Controller::new(InMemorySessionStore::new())
}

fn registered_id(snapshot: &GameStateSnapshot) -> String {
    snapshot
        .registered_player()
        .as_ref()
        .expect("registered player")
        .id()
        .clone()
}

#[test]
fn test_controller_creation() {
    let controller = controller();
    assert!(controller.store().is_empty());
    assert_eq!(controller.board_size(), 3);
}

#[test]
fn test_start_session() {
    let mut controller = controller();
    let snapshot = controller.start_session("player-1").unwrap();

    assert_eq!(controller.store().len(), 1);
    assert_eq!(snapshot.player_names(), &vec!["player-1"]);
    assert!(snapshot.board().is_none());
    assert!(snapshot.winner().is_none());

    let player = snapshot.active_player();
    assert!(!player.id().is_empty());
    assert_eq!(player.name(), "player-1");
    assert_eq!(*player.sign(), Sign::X);
    assert!(*player.is_active());
    assert_eq!(snapshot.registered_player().as_ref(), Some(player));
}

#[test]
fn test_session_and_player_ids_are_unique() {
    let mut controller = controller();
    let a = controller.start_session("a").unwrap();
    let b = controller.start_session("b").unwrap();
    assert_ne!(a.session_id(), b.session_id());
    assert_ne!(a.active_player().id(), b.active_player().id());
    assert_eq!(controller.store().len(), 2);
}

#[test]
fn test_join_session() {
    let mut controller = controller();
    let created = controller.start_session("player-1").unwrap();
    let joined = controller
        .join_session("player-2", created.session_id())
        .unwrap();

    assert_eq!(joined.session_id(), created.session_id());
    assert_eq!(joined.player_names(), &vec!["player-1", "player-2"]);
    assert!(joined.board().is_none());
    assert!(joined.winner().is_none());

    // The creator still holds the first turn.
    assert_eq!(joined.active_player(), created.active_player());

    let joiner = joined.registered_player().as_ref().unwrap();
    assert_eq!(joiner.name(), "player-2");
    assert_eq!(*joiner.sign(), Sign::O);
    assert!(!*joiner.is_active());
    assert_ne!(joiner.id(), created.active_player().id());
}

#[test]
fn test_join_unknown_session() {
    let mut controller = controller();
    let err = controller.join_session("player-2", "nope").unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::SessionNotFound("nope".to_string()));
}

#[test]
fn test_join_full_session() {
    let mut controller = controller();
    let id = controller.start_session("a").unwrap().session_id().clone();
    controller.join_session("b", &id).unwrap();
    let err = controller.join_session("c", &id).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::SessionFull(id));
}

#[test]
fn test_start_game() {
    let mut controller = controller();
    let id = controller.start_session("player-1").unwrap().session_id().clone();
    controller.join_session("player-2", &id).unwrap();
    let snapshot = controller.start_game(&id).unwrap();

    let board = snapshot.board().as_ref().expect("board after start");
    assert_eq!(board.len(), 3);
    assert!(board.iter().flatten().all(|c| *c == Cell::Empty));
    assert_eq!(snapshot.active_player().name(), "player-1");
    assert!(snapshot.winner().is_none());
    assert!(snapshot.registered_player().is_none());
}

#[test]
fn test_start_game_needs_two_players() {
    let mut controller = controller();
    let id = controller.start_session("alone").unwrap().session_id().clone();
    let err = controller.start_game(&id).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::InvalidPlayerCount(1));
    assert_eq!(controller.get_status(&id).unwrap(), None);

    let err = controller.start_game("missing").unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::SessionNotFound(_)));
}

#[test]
fn test_configured_board_size() {
    let mut controller = controller().with_board_size(5);
    let id = controller.start_session("a").unwrap().session_id().clone();
    controller.join_session("b", &id).unwrap();
    let snapshot = controller.start_game(&id).unwrap();
    assert_eq!(snapshot.board().as_ref().unwrap().len(), 5);

    let mut bad = Controller::new(InMemorySessionStore::new()).with_board_size(4);
    let id = bad.start_session("a").unwrap().session_id().clone();
    bad.join_session("b", &id).unwrap();
    let err = bad.start_game(&id).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InvalidDimensions { .. }));
}

#[test]
fn test_get_status() {
    let mut controller = controller();
    let created = controller.start_session("a").unwrap();
    let id = created.session_id().clone();
    assert_eq!(controller.get_status(&id).unwrap(), None);

    controller.join_session("b", &id).unwrap();
    assert_eq!(controller.get_status(&id).unwrap(), None);

    let started = controller.start_game(&id).unwrap();
    assert_eq!(controller.get_status(&id).unwrap(), Some(started));

    let err = controller.get_status("missing").unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::SessionNotFound(_)));
}

#[test]
fn test_make_move_before_start() {
    let mut controller = controller();
    let created = controller.start_session("a").unwrap();
    let id = created.session_id().clone();
    let err = controller
        .make_move(&id, created.active_player().id(), 0, 0)
        .unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::GameNotStarted(id));
}

#[test]
fn test_make_move_errors_propagate() {
    let mut controller = controller();
    let created = controller.start_session("a").unwrap();
    let id = created.session_id().clone();
    let alice = registered_id(&created);
    let bob = registered_id(&controller.join_session("b", &id).unwrap());
    controller.start_game(&id).unwrap();

    let err = controller.make_move("missing", &alice, 0, 0).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::SessionNotFound(_)));

    let err = controller.make_move(&id, "stranger", 0, 0).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::PlayerNotFound(_)));

    let err = controller.make_move(&id, &bob, 0, 0).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::MoveNotAllowed(_)));

    controller.make_move(&id, &alice, 0, 0).unwrap();
    let err = controller.make_move(&id, &bob, 0, 0).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::CellOccupied { .. }));

    let err = controller.make_move(&id, &bob, 9, 9).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::OutOfRange { .. }));

    // Rejected moves were not stored.
    let status = controller.get_status(&id).unwrap().unwrap();
    assert_eq!(status.active_player().id(), &bob);
    let occupied = status
        .board()
        .as_ref()
        .unwrap()
        .iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_end_to_end_game() {
    let mut controller = controller();

    let created = controller.start_session("Alice").unwrap();
    let id = created.session_id().clone();
    let alice = registered_id(&created);
    assert_eq!(*created.active_player().sign(), Sign::X);

    let joined = controller.join_session("Bob", &id).unwrap();
    let bob = registered_id(&joined);
    assert_eq!(joined.player_names(), &vec!["Alice", "Bob"]);

    let started = controller.start_game(&id).unwrap();
    assert!(started.board().as_ref().unwrap().iter().flatten().all(|c| c.is_empty()));

    let moves = [
        (&alice, 0, 0),
        (&bob, 1, 1),
        (&alice, 0, 1),
        (&bob, 0, 2),
        (&alice, 1, 0),
    ];
    for (player, row, col) in moves {
        let snapshot = controller.make_move(&id, player, row, col).unwrap();
        assert!(snapshot.winner().is_none());
    }
    let last = controller.make_move(&id, &bob, 2, 0).unwrap();

    use Cell::{Empty as N, Occupied};
    let (x, o) = (Occupied(Sign::X), Occupied(Sign::O));
    let expected = vec![vec![x, x, o], vec![x, o, N], vec![o, N, N]];
    assert_eq!(last.board().as_ref(), Some(&expected));

    // Anti-diagonal (0,2), (1,1), (2,0) belongs to O.
    let status = controller.get_status(&id).unwrap().unwrap();
    assert_eq!(status, last);
    let winner = status.winner().as_ref().expect("finished");
    assert_eq!(winner.player().as_ref().unwrap().name(), "Bob");
    assert_eq!(winner.sign(), &Some(Sign::O));
    assert!(!*winner.is_draw());

    let err = controller.make_move(&id, &alice, 2, 2).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::GameOver);
}

#[test]
fn test_stored_players_track_the_turn() {
    let mut controller = controller();
    let created = controller.start_session("a").unwrap();
    let id = created.session_id().clone();
    let alice = registered_id(&created);
    let bob = registered_id(&controller.join_session("b", &id).unwrap());
    controller.start_game(&id).unwrap();
    controller.make_move(&id, &alice, 0, 0).unwrap();

    let record = controller.store().get(&id).unwrap();
    let active: Vec<&String> = record
        .players()
        .iter()
        .filter(|p| *p.is_active())
        .map(|p| p.id())
        .collect();
    assert_eq!(active, vec![&bob]);
}

#[test]
fn test_rejected_join_leaves_record_unchanged() {
    let mut controller = controller();
    let id = controller.start_session("a").unwrap().session_id().clone();
    controller.join_session("b", &id).unwrap();
    controller.join_session("c", &id).unwrap_err();

    let record = controller.store().get(&id).unwrap();
    let names: Vec<&String> = record.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_restart_game() {
    let mut controller = controller();
    let created = controller.start_session("a").unwrap();
    let id = created.session_id().clone();
    let alice = registered_id(&created);
    controller.join_session("b", &id).unwrap();
    controller.start_game(&id).unwrap();
    controller.make_move(&id, &alice, 1, 1).unwrap();

    let restarted = controller.start_game(&id).unwrap();
    assert!(restarted.board().as_ref().unwrap().iter().flatten().all(|c| c.is_empty()));
    assert_eq!(restarted.active_player().id(), &alice);
}

#[test]
fn test_close_session() {
    let mut controller = controller();
    let id = controller.start_session("a").unwrap().session_id().clone();

    controller.close_session(&id);
    assert!(controller.store().is_empty());
    let err = controller.get_status(&id).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::SessionNotFound(_)));

    // Closing twice is tolerated.
    controller.close_session(&id);
}
