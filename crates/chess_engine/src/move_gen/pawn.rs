//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, destination empty
//! - **Double push**: from the starting rank only, both squares empty. Tagged
//!   [`MoveKind::DoublePawnPush`] so applying it sets the en-passant target.
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonal step onto the position's en-passant target,
//!   tagged [`MoveKind::EnPassant`]
//! - **Promotion**: any move reaching the last rank becomes four moves
//!   (queen, rook, bishop, knight), never a bare pawn move
//!
//! Emission order per pawn: single push, double push, capture toward the
//! a-file, capture toward the h-file.

use super::push_pawn_move;
use crate::position::Position;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `position` - The current position
/// * `from` - Square holding the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&pos, Square::parse("e2")?, Color::White, &mut moves);
/// // moves now holds e2e3 and e2e4
/// ```
pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(0, dir) {
        if position.board.is_empty(one) {
            push_pawn_move(moves, from, one, color, MoveKind::Normal);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(0, dir) {
                    if position.board.is_empty(two) {
                        moves.push(Move::new(from, two, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(to) = from.offset(file_delta, dir) else {
            continue;
        };
        match position.board.get(to) {
            Some(target) if target.color != color => {
                push_pawn_move(moves, from, to, color, MoveKind::Normal);
            }
            None if position.en_passant == Some(to) => {
                moves.push(Move::new(from, to, MoveKind::EnPassant));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::parse(text).unwrap()
    }

    fn pawn_moves(position: &Position, from: &str) -> Vec<Move> {
        let mut moves = Vec::new();
        let color = position.side_to_move;
        generate_pawn_moves(position, sq(from), color, &mut moves);
        moves
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let mut pos = Position::empty(Color::White);
        pos.board.set(sq("e2"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        pos.board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(pawn_moves(&pos, "e2").is_empty());

        pos.board.set(sq("e3"), None);
        pos.board.set(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        let moves = pawn_moves(&pos, "e2");
        assert_eq!(moves, vec![Move::new(sq("e2"), sq("e3"), MoveKind::Normal)]);
    }

    #[test]
    fn test_promotion_generates_four_moves() {
        let mut pos = Position::empty(Color::White);
        pos.board.set(sq("g7"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        pos.board.set(sq("h8"), Some(Piece::new(Color::Black, PieceKind::Rook)));

        let moves = pawn_moves(&pos, "g7");
        assert_eq!(moves.len(), 8, "4 push promotions plus 4 capture promotions");
        assert_eq!(moves[0], Move::promotion(sq("g7"), sq("g8"), PieceKind::Queen));
        assert_eq!(moves[3], Move::promotion(sq("g7"), sq("g8"), PieceKind::Knight));
        assert!(moves.iter().all(|m| m.promotion.is_some()));
    }

    #[test]
    fn test_en_passant_only_on_target_square() {
        let mut pos = Position::empty(Color::Black);
        pos.board.set(sq("d4"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        pos.board.set(sq("e4"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        pos.board.set(sq("c4"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        pos.en_passant = Some(sq("e3"));

        let moves = pawn_moves(&pos, "d4");
        assert!(moves.contains(&Move::new(sq("d4"), sq("e3"), MoveKind::EnPassant)));
        assert!(moves.iter().all(|m| m.to != sq("c3")));
    }
}
