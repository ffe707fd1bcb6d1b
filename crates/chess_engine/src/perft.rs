//! Perft: exhaustive legal-move tree counts
//!
//! Counting leaf nodes of the full legal-move tree and comparing against
//! published reference numbers is the standard way to validate a move
//! generator. Castling, en passant and promotion bugs all show up as count
//! mismatches within a few plies.

use crate::move_gen::legal_moves;
use crate::position::Position;
use crate::types::Move;

/// Number of leaf nodes at exactly `depth` plies
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(perft(&Position::starting(), 3), 8_902);
/// ```
pub fn perft(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&position.after(mv), depth - 1))
        .sum()
}

/// Per-root-move breakdown of [`perft`], in generation order
///
/// Diffing this against another engine's divide output pinpoints the
/// subtree where counts diverge.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(position)
        .into_iter()
        .map(|mv| (mv, perft(&position.after(mv), depth - 1)))
        .collect()
}
