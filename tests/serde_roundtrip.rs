#![cfg(feature = "serde")]

use chess_rules::board::{GameState, Status};
use chess_rules::events::GameEvent;

#[test]
fn game_state_survives_json() {
    let mut game = GameState::new();
    for text in ["e2e4", "d7d5", "e4d5", "g8f6"] {
        let mv = game.parse_move(text).unwrap();
        game.apply(mv).unwrap();
    }

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);

    // History came along, so undo still works after a reload.
    for _ in 0..4 {
        assert!(restored.undo().is_ok());
    }
    assert_eq!(restored, GameState::new());
}

#[test]
fn events_serialize() {
    let game = GameState::new();
    let mv = game.parse_move("g1f3").unwrap();
    let event = GameEvent::MoveApplied {
        mv,
        status: Status::Normal,
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
