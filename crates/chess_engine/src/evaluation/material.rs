//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Value of one piece kind; the king counts as zero
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => 0,
    }
}

/// Evaluate material balance
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| piece_value(piece.kind) * piece.color.sign())
        .sum()
}
