//! Error types for game module
//!
//! Errors raised by the interactive layer on top of the engine: bad typed
//! input and moves attempted out of turn. Engine errors pass through
//! unchanged.

use chess_engine::{ChessEngineError, Color};

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Rules or scheduling error from the engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// Input that is neither a command nor a move
    #[error("Unknown command: {input:?} (type 'help')")]
    InvalidCommand { input: String },

    /// Human input while the AI is to move
    #[error("Not your turn: {side} is played by the AI")]
    NotYourTurn { side: Color },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
