//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! Rather than generating every enemy move, we look outward from the target
//! square: a knight offset that lands on an enemy knight, a diagonal ray
//! ending on an enemy bishop or queen, and so on. Each probe touches at most
//! a handful of squares.
//!
//! Pawn attacks only count diagonal captures, never pushes, and a king
//! attacks its eight neighbours regardless of whether stepping there would be
//! legal for it.

use crate::constants::*;
use crate::position::Position;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `position` - The current position
/// * `square` - Target square to check
/// * `by_color` - Color of pieces that might attack
///
/// # Returns
///
/// `true` if the square is attacked by any piece of the specified color
///
/// # Examples
///
/// ```rust,ignore
/// // Is f3 covered by Black after 1. e4?
/// let attacked = is_attacked(&pos, Square::parse("f3")?, Color::Black);
/// ```
pub fn is_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    // A pawn of `by_color` attacks from one rank behind the target
    let pawn_rank = -by_color.pawn_direction();
    for file_delta in [-1, 1] {
        if let Some(from) = square.offset(file_delta, pawn_rank) {
            if holds(position, from, by_color, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    leaper_hit(position, square, by_color, &KNIGHT_OFFSETS, PieceKind::Knight)
        || leaper_hit(position, square, by_color, &KING_OFFSETS, PieceKind::King)
        || ray_hit(position, square, by_color, &ROOK_DIRS, &[PieceKind::Rook, PieceKind::Queen])
        || ray_hit(position, square, by_color, &BISHOP_DIRS, &[PieceKind::Bishop, PieceKind::Queen])
}

#[inline]
fn holds(position: &Position, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
    position
        .board
        .get(square)
        .is_some_and(|p| p.color == color && kinds.contains(&p.kind))
}

fn leaper_hit(
    position: &Position,
    square: Square,
    by_color: Color,
    offsets: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    offsets
        .iter()
        .filter_map(|&(df, dr)| square.offset(df, dr))
        .any(|from| holds(position, from, by_color, &[kind]))
}

/// First piece met along each ray decides
fn ray_hit(
    position: &Position,
    square: Square,
    by_color: Color,
    dirs: &[(i8, i8)],
    kinds: &[PieceKind],
) -> bool {
    dirs.iter().any(|&(df, dr)| {
        let mut current = square;
        while let Some(next) = current.offset(df, dr) {
            if !position.board.is_empty(next) {
                return holds(position, next, by_color, kinds);
            }
            current = next;
        }
        false
    })
}

/// Check if the king of `color` is attacked
///
/// A position without a king of that color is never "in check"; such
/// positions only appear in hand-built tests.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    position
        .board
        .king_square(color)
        .is_some_and(|king| is_attacked(position, king, color.opponent()))
}
