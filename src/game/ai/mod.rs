//! Chess AI opponent system
//!
//! This module integrates the chess engine for AI opponent functionality.
//! The search runs on a worker thread so the input loop never stalls.
//!
//! # Architecture
//!
//! - `ChessAIResource`: game mode, difficulty and optional depth override
//! - `AiTurnController`: dispatches a search when it is the AI's turn and
//!   polls for the result every tick
//! - `AIStatistics`: score, depth, nodes and time of the last AI move
//!
//! # Integration Strategy
//!
//! The engine's `Game` is the single source of truth. An AI turn is:
//! 1. Snapshot the game into a search request (position copy + ticket)
//! 2. Run the search on the worker
//! 3. Poll for completion
//! 4. Apply the move through the same `apply_move` path as human moves,
//!    unless the ticket shows the game has moved on
//!
//! This ensures AI moves follow the same validation rules as human moves.

pub mod resource;
pub mod systems;

// Re-export for convenience
pub use resource::{AIDifficulty, ChessAIResource, GameMode};
pub use systems::{AIMove, AIStatistics, AiTurnController};
