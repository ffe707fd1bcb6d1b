//! Move generation
//!
//! Produces pseudo-legal moves per piece kind and filters them down to legal
//! moves by playing each candidate on a copy of the position and rejecting
//! any that leave the mover's king attacked.
//!
//! ## Generation Order
//!
//! Squares are visited in index order (a1, b1, ... h8). For each piece the
//! per-kind generator emits its moves in a fixed order documented in the
//! submodules. The search relies on this order being stable: among equally
//! scored moves it keeps the first one generated.
//!
//! ## Legality
//!
//! The filter is brute force. Pins, discovered checks and the
//! en-passant horizontal pin all fall out of "make the move, then ask
//! [`is_in_check`]" without any special casing.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

pub use attack::{is_attacked, is_in_check};

use crate::position::Position;
use crate::types::*;

/// All pseudo-legal moves for the side to move
///
/// Moves obey movement and occupancy rules but may leave the mover's own
/// king in check.
pub fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let color = position.side_to_move;

    for (from, piece) in position.board.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn::generate_pawn_moves(position, from, color, &mut moves),
            PieceKind::Knight => knight::generate_knight_moves(position, from, color, &mut moves),
            PieceKind::Bishop => sliding::generate_bishop_moves(position, from, color, &mut moves),
            PieceKind::Rook => sliding::generate_rook_moves(position, from, color, &mut moves),
            PieceKind::Queen => sliding::generate_queen_moves(position, from, color, &mut moves),
            PieceKind::King => king::generate_king_moves(position, from, color, &mut moves),
        }
    }

    moves
}

/// All legal moves for the side to move, in generation order
///
/// # Examples
///
/// ```rust,ignore
/// let moves = legal_moves(&Position::starting());
/// assert_eq!(moves.len(), 20);
/// ```
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let mover = position.side_to_move;
    pseudo_legal_moves(position)
        .into_iter()
        .filter(|&mv| !is_in_check(&position.after(mv), mover))
        .collect()
}

/// True if the side to move has at least one legal move
///
/// Stops at the first legal move instead of building the full list.
pub fn has_legal_move(position: &Position) -> bool {
    let mover = position.side_to_move;
    pseudo_legal_moves(position)
        .into_iter()
        .any(|mv| !is_in_check(&position.after(mv), mover))
}

/// Push a pawn move, expanding it into the four promotions on the last rank
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, color: Color, kind: MoveKind) {
    if to.rank() == color.promotion_rank() {
        for piece in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to, kind));
    }
}

/// Empty or enemy-occupied
#[inline]
fn can_land_on(position: &Position, square: Square, color: Color) -> bool {
    position
        .board
        .get(square)
        .is_none_or(|piece| piece.color != color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::parse(text).unwrap()
    }

    fn coords(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let moves = legal_moves(&Position::starting());
        assert_eq!(moves.len(), 20);
        let knights = moves
            .iter()
            .filter(|m| m.from == sq("b1") || m.from == sq("g1"))
            .count();
        assert_eq!(knights, 4);
    }

    #[test]
    fn test_generation_order_follows_square_index() {
        let moves = legal_moves(&Position::starting());
        // b1 knight comes before the pawns on rank 2, offsets clockwise from north
        assert_eq!(coords(&moves[..2]), vec!["b1c3", "b1a3"]);
        assert_eq!(coords(&moves[4..6]), vec!["a2a3", "a2a4"]);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_pin_line() {
        // White knight on e2 pinned by the rook on e8
        let mut pos = Position::empty(Color::White);
        pos.board.set(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        pos.board.set(sq("e2"), Some(Piece::new(Color::White, PieceKind::Knight)));
        pos.board.set(sq("e8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        pos.board.set(sq("a8"), Some(Piece::new(Color::Black, PieceKind::King)));

        let moves = legal_moves(&pos);
        assert!(moves.iter().all(|m| m.from != sq("e2")));
        assert!(!pseudo_legal_moves(&pos).iter().all(|m| m.from != sq("e2")));
    }

    #[test]
    fn test_has_legal_move_matches_full_generation() {
        let pos = Position::starting();
        assert!(has_legal_move(&pos));

        // Black king a8 boxed in by the queen on b6, no check: stalemate
        let mut stalemate = Position::empty(Color::Black);
        stalemate.board.set(sq("a8"), Some(Piece::new(Color::Black, PieceKind::King)));
        stalemate.board.set(sq("b6"), Some(Piece::new(Color::White, PieceKind::Queen)));
        stalemate.board.set(sq("h1"), Some(Piece::new(Color::White, PieceKind::King)));
        assert!(!has_legal_move(&stalemate));
        assert!(legal_moves(&stalemate).is_empty());
    }
}
