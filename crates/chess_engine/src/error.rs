//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! move validation, undo, notation parsing and search scheduling.
//!
//! An empty legal-move list is never an error: it is a terminal position and
//! is reported through [`crate::GameStatus`].

use crate::api::GameStatus;
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Move is not a member of the current legal move list
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Undo requested with an empty history
    #[error("No move to undo")]
    NoMoveToUndo,

    /// Move attempted after the game reached a terminal state
    #[error("Game is over: {status}")]
    GameOver { status: GameStatus },

    /// Square notation outside a1..h8
    #[error("Invalid square: {notation:?} (expected a1-h8)")]
    InvalidSquare { notation: String },

    /// Move text that is not coordinate notation (e2e4, e7e8q)
    #[error("Invalid move notation: {notation:?}")]
    InvalidMoveNotation { notation: String },

    /// Malformed Forsyth-Edwards Notation
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },

    /// A search is already outstanding for this scheduler
    #[error("A search is already in flight")]
    SearchInFlight,

    /// Search worker could not be spawned or died before replying
    #[error("Search worker error: {message}")]
    SearchWorker { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
