//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares along a ray until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step one square at a time:
//! 1. Stop at the board edge
//! 2. Empty square: emit a quiet move and keep going
//! 3. Enemy piece: emit the capture and stop
//! 4. Own piece: stop without emitting
//!
//! Rays are walked in the order given by [`ROOK_DIRS`] and [`BISHOP_DIRS`];
//! the queen walks the rook rays first, then the bishop rays.

use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::position::Position;
use crate::types::*;

/// Walk every ray in `dirs` from `from`, appending moves
pub(super) fn generate_sliding_moves(
    position: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match position.board.get(to) {
                None => moves.push(Move::new(from, to, MoveKind::Normal)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::new(from, to, MoveKind::Normal));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

pub fn generate_bishop_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(position, from, color, &BISHOP_DIRS, moves);
}

pub fn generate_rook_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(position, from, color, &ROOK_DIRS, moves);
}

/// Queen = rook rays + bishop rays
pub fn generate_queen_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(position, from, color, &ROOK_DIRS, moves);
    generate_sliding_moves(position, from, color, &BISHOP_DIRS, moves);
}
