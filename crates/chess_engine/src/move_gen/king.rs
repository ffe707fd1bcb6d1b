//! King move generation
//!
//! Kings move one square in any direction. Castling is appended after the
//! ordinary steps, kingside before queenside.
//!
//! ## Castling Conditions
//!
//! - The matching castling-rights flag is still set (the flags stand in for
//!   "king and rook have not moved")
//! - King on its home square and the rook on its corner
//! - Every square strictly between king and rook is empty
//! - The king's start, transit and end squares are not attacked
//!
//! Whether the king ends up in check is left to the legality filter like any
//! other move; the transit check is the part only castling needs.

use super::attack::is_attacked;
use super::can_land_on;
use crate::constants::KING_OFFSETS;
use crate::position::Position;
use crate::types::*;

/// Generate king moves (including castling) from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_king_moves(&pos, Square::parse("e1")?, Color::White, &mut moves);
/// ```
pub fn generate_king_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (df, dr) in KING_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            if can_land_on(position, to, color) {
                moves.push(Move::new(from, to, MoveKind::Normal));
            }
        }
    }

    generate_castling_moves(position, from, color, moves);
}

fn generate_castling_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let rank = color.back_rank();
    if from != Square::new(4, rank) {
        return;
    }
    let enemy = color.opponent();
    let rook = Some(Piece::new(color, PieceKind::Rook));

    if position.castling.kingside(color)
        && position.board.get(Square::new(7, rank)) == rook
        && [5, 6].iter().all(|&f| position.board.is_empty(Square::new(f, rank)))
        && [4, 5, 6]
            .iter()
            .all(|&f| !is_attacked(position, Square::new(f, rank), enemy))
    {
        moves.push(Move::new(from, Square::new(6, rank), MoveKind::CastleKingside));
    }

    if position.castling.queenside(color)
        && position.board.get(Square::new(0, rank)) == rook
        && [1, 2, 3].iter().all(|&f| position.board.is_empty(Square::new(f, rank)))
        && [4, 3, 2]
            .iter()
            .all(|&f| !is_attacked(position, Square::new(f, rank), enemy))
    {
        moves.push(Move::new(from, Square::new(2, rank), MoveKind::CastleQueenside));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::parse(text).unwrap()
    }

    fn castling_position() -> Position {
        let mut pos = Position::empty(Color::White);
        pos.castling = CastlingRights::ALL;
        pos.board.set(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        pos.board.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        pos.board.set(sq("h1"), Some(Piece::new(Color::White, PieceKind::Rook)));
        pos.board.set(sq("e8"), Some(Piece::new(Color::Black, PieceKind::King)));
        pos
    }

    fn castles(pos: &Position) -> Vec<MoveKind> {
        let mut moves = Vec::new();
        generate_king_moves(pos, sq("e1"), Color::White, &mut moves);
        moves.into_iter().filter(|m| m.is_castle()).map(|m| m.kind).collect()
    }

    #[test]
    fn test_both_castles_available_kingside_first() {
        let pos = castling_position();
        assert_eq!(
            castles(&pos),
            vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]
        );
    }

    #[test]
    fn test_cannot_castle_through_attacked_square() {
        let mut pos = castling_position();
        // Rook on f8 covers f1, the kingside transit square
        pos.board.set(sq("f8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(castles(&pos), vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn test_cannot_castle_out_of_check() {
        let mut pos = castling_position();
        pos.board.set(sq("e5"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(castles(&pos).is_empty());
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked_but_not_occupied() {
        let mut pos = castling_position();
        pos.board.set(sq("b8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(castles(&pos).contains(&MoveKind::CastleQueenside));

        pos.board.set(sq("b1"), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(castles(&pos), vec![MoveKind::CastleKingside]);
    }

    #[test]
    fn test_cleared_right_blocks_castling() {
        let mut pos = castling_position();
        pos.castling.white_kingside = false;
        assert_eq!(castles(&pos), vec![MoveKind::CastleQueenside]);
    }
}
