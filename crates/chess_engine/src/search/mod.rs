//! Minimax search with alpha-beta pruning
//!
//! This module implements the engine's move choice:
//! - Plain recursive minimax, scores always from White's point of view
//! - Alpha-beta pruning with the window threaded through as parameters
//! - Fixed depth, no quiescence, no move ordering, no transposition table
//!
//! The side to move at the root is the maximizing side when it is White and
//! the minimizing side when it is Black.
//!
//! ## Determinism
//!
//! Moves are visited in generation order and a later move only replaces the
//! current best when it scores strictly better. The same position and depth
//! always give the same move, and the pruned search picks exactly the move
//! the unpruned search ([`search_unpruned`]) picks.
//!
//! ## Terminal Scores
//!
//! - Checkmate: `MATE_SCORE + remaining_depth` against the mated side, so a
//!   mate found closer to the root outranks a slower one
//! - Stalemate, fifty-move rule, threefold repetition: 0
//!
//! ## Module Organization
//!
//! - `alphabeta` - The recursive search and its root driver

mod alphabeta;

pub use alphabeta::{search, search_unpruned, search_until_stopped, search_with_history};

use crate::constants::{MATE_SCORE, MATE_THRESHOLD};
use crate::types::Move;
use serde::{Deserialize, Serialize};

/// Outcome of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move, `None` when the root has no legal move, is already drawn,
    /// or the depth was 0
    pub best_move: Option<Move>,
    /// Score from White's point of view
    pub score: i32,
    /// Nodes visited (diagnostic)
    pub nodes: u64,
    /// Depth the search was run to
    pub depth: u8,
}

impl SearchResult {
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() > MATE_THRESHOLD
    }

    /// Plies until mate when the score is a mate score
    pub fn mate_in_plies(&self) -> Option<u8> {
        if !self.is_mate_score() {
            return None;
        }
        let remaining = (self.score.abs() - MATE_SCORE).clamp(0, self.depth as i32);
        Some(self.depth - remaining as u8)
    }
}
