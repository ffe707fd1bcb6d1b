//! Knight move generation
//!
//! Knights jump in an L-shape (2 squares in one direction, 1 square perpendicular)
//! and ignore anything standing in between. Offsets come from
//! [`KNIGHT_OFFSETS`], bounds-checked per step.

use super::can_land_on;
use crate::constants::KNIGHT_OFFSETS;
use crate::position::Position;
use crate::types::*;

/// Generate knight moves from a given square
///
/// # Arguments
///
/// * `position` - The current position
/// * `from` - Square holding the knight
/// * `color` - Color of the knight
/// * `moves` - Output vector to append moves to
pub fn generate_knight_moves(
    position: &Position,
    from: Square,
    color: Color,
    moves: &mut Vec<Move>,
) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            if can_land_on(position, to, color) {
                moves.push(Move::new(from, to, MoveKind::Normal));
            }
        }
    }
}
