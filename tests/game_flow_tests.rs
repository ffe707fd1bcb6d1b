//! Game Flow Integration Tests
//!
//! Tests for full game flows through `GameSession`, including:
//! - Human vs AI turn handling
//! - Undo and reset while a search is in flight
//! - Self-play to a finished game
//! - Command errors

use chess_engine::{ChessEngineError, Color, Game, GameStatus};
use chess_masters::game::{
    AIDifficulty, ChessAIResource, GameError, GameMode, GameSession, Reply,
};

/// Shallow AI so tests stay fast
fn vs_ai(ai_color: Color) -> ChessAIResource {
    ChessAIResource {
        mode: GameMode::VsAI { ai_color },
        difficulty: AIDifficulty::Easy,
        depth_override: Some(1),
    }
}

// ============================================================================
// Turn Handling
// ============================================================================

#[test]
fn test_ai_replies_after_human_move() {
    //! Human plays White; one tick dispatches, wait lands Black's reply
    let mut session = GameSession::new(Game::new(), vs_ai(Color::Black));
    assert!(session.awaiting_human());

    assert_eq!(session.handle_line("e2e4").unwrap(), Reply::Moved("e4".into()));
    assert!(!session.awaiting_human());

    assert_eq!(session.tick().unwrap(), None);
    assert!(session.is_ai_thinking());

    let reply = session.wait_for_ai().unwrap().expect("AI should move");
    assert_eq!(session.game().history().len(), 2);
    assert_eq!(session.game().side_to_move(), Color::White);
    assert_eq!(session.game().notation()[1], reply.san);
    assert_eq!(session.ai_stats().last_depth, 1);
    assert!(session.awaiting_human());
}

#[test]
fn test_human_cannot_move_for_ai() {
    let mut session = GameSession::new(Game::new(), vs_ai(Color::White));
    assert_eq!(
        session.handle_line("e2e4"),
        Err(GameError::NotYourTurn { side: Color::White })
    );
    assert!(session.game().history().is_empty());
}

// ============================================================================
// Undo / Reset With Pending Searches
// ============================================================================

#[test]
fn test_undo_rolls_back_to_human_turn() {
    //! After the AI replied, undo removes both plies
    let mut session = GameSession::new(Game::new(), vs_ai(Color::Black));
    session.handle_line("d2d4").unwrap();
    session.tick().unwrap();
    session.wait_for_ai().unwrap().expect("AI should move");

    assert_eq!(session.handle_line("undo").unwrap(), Reply::Undone(2));
    assert!(session.game().history().is_empty());
    assert_eq!(session.game().side_to_move(), Color::White);
}

#[test]
fn test_undo_while_ai_thinking_discards_result() {
    //! The search started for the undone position must never be played
    let mut session = GameSession::new(Game::new(), vs_ai(Color::Black));
    session.handle_line("e2e4").unwrap();
    session.tick().unwrap();
    assert!(session.is_ai_thinking());

    assert_eq!(session.handle_line("u").unwrap(), Reply::Undone(1));
    assert!(!session.is_ai_thinking());
    assert_eq!(session.wait_for_ai().unwrap(), None);
    assert!(session.game().history().is_empty());
    assert_eq!(session.ai_stats().discarded, 1);

    // White to move again: the AI stays idle
    assert_eq!(session.tick().unwrap(), None);
    assert!(!session.is_ai_thinking());
}

#[test]
fn test_reset_during_search() {
    let mut session = GameSession::new(Game::new(), vs_ai(Color::Black));
    session.handle_line("g1f3").unwrap();
    session.tick().unwrap();

    assert_eq!(session.handle_line("new").unwrap(), Reply::Reset);
    assert!(!session.is_ai_thinking());
    assert!(session.game().history().is_empty());
    assert_eq!(session.game().current_state(), GameStatus::InProgress);
}

#[test]
fn test_undo_with_no_moves() {
    let mut session = GameSession::new(Game::new(), vs_ai(Color::Black));
    assert_eq!(
        session.handle_line("undo"),
        Err(GameError::Engine(ChessEngineError::NoMoveToUndo))
    );
}

// ============================================================================
// Game End
// ============================================================================

#[test]
fn test_self_play_finishes_mate_in_one() {
    //! AI vs AI from a mate-in-one position plays the mate and stops
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let config = ChessAIResource {
        mode: GameMode::AiVsAi,
        difficulty: AIDifficulty::Easy,
        depth_override: None,
    };
    let mut session = GameSession::new(game, config);

    session.tick().unwrap();
    let played = session.wait_for_ai().unwrap().expect("AI should mate");
    assert_eq!(played.san, "Ra8#");
    assert_eq!(session.game().current_state(), GameStatus::Checkmate);
    assert_eq!(session.game().winner(), Some(Color::White));

    // Nothing left to search
    session.tick().unwrap();
    assert!(!session.is_ai_thinking());
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut session = GameSession::new(
        Game::new(),
        ChessAIResource {
            mode: GameMode::VsHuman,
            ..Default::default()
        },
    );
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        session.handle_line(mv).unwrap();
    }
    assert_eq!(
        session.handle_line("a2a3"),
        Err(GameError::Engine(ChessEngineError::GameOver {
            status: GameStatus::Checkmate
        }))
    );
}

#[test]
fn test_unknown_command() {
    let mut session = GameSession::new(Game::new(), ChessAIResource::default());
    assert!(matches!(
        session.handle_line("castle please"),
        Err(GameError::InvalidCommand { .. })
    ));
    assert_eq!(session.handle_line("help").unwrap(), Reply::Help);
}
