//! Move notation
//!
//! Two textual forms are supported:
//!
//! - **Coordinate** (`e2e4`, `e7e8q`): what [`Move`]'s `Display` prints and
//!   what [`parse_coordinate`] reads. Used for typed input.
//! - **Standard algebraic** (`Nf3`, `exd5`, `O-O`, `e8=Q+`, `Qh4#`): built by
//!   [`to_san`] for move history display.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{has_legal_move, is_in_check, legal_moves};
use crate::position::Position;
use crate::types::*;

/// Parse coordinate notation into origin, destination and promotion piece
///
/// Accepts an optional promotion letter (`q`, `r`, `b`, `n`, any case).
/// Whether the move is legal is not checked here.
///
/// # Examples
///
/// ```rust,ignore
/// let (from, to, promo) = parse_coordinate("e7e8q")?;
/// assert_eq!(promo, Some(PieceKind::Queen));
/// ```
pub fn parse_coordinate(text: &str) -> ChessEngineResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    let invalid = || ChessEngineError::InvalidMoveNotation {
        notation: text.to_string(),
    };

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }
    let from = Square::parse(&text[0..2]).map_err(|_| invalid())?;
    let to = Square::parse(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid()),
        },
    };

    Ok((from, to, promotion))
}

/// Standard algebraic notation of `mv`, played from `position`
///
/// `mv` must be legal in `position`. File disambiguation is preferred over
/// rank, and both are used only when neither alone is unique.
pub fn to_san(position: &Position, mv: Move) -> String {
    let mut san = match mv.kind {
        MoveKind::CastleKingside => "O-O".to_string(),
        MoveKind::CastleQueenside => "O-O-O".to_string(),
        _ => piece_move_san(position, mv),
    };

    let next = position.after(mv);
    if is_in_check(&next, next.side_to_move) {
        san.push(if has_legal_move(&next) { '+' } else { '#' });
    }
    san
}

fn piece_move_san(position: &Position, mv: Move) -> String {
    let Some(piece) = position.board.get(mv.from) else {
        return mv.to_string();
    };
    let is_capture = mv.kind == MoveKind::EnPassant || position.board.get(mv.to).is_some();
    let mut san = String::with_capacity(8);

    if piece.kind == PieceKind::Pawn {
        if is_capture {
            san.push(file_char(mv.from));
        }
    } else {
        san.push(piece.kind.letter());

        let rivals: Vec<Square> = legal_moves(position)
            .into_iter()
            .filter(|other| {
                other.to == mv.to
                    && other.from != mv.from
                    && position.board.get(other.from) == Some(piece)
            })
            .map(|other| other.from)
            .collect();

        if !rivals.is_empty() {
            let file_unique = rivals.iter().all(|sq| sq.file() != mv.from.file());
            let rank_unique = rivals.iter().all(|sq| sq.rank() != mv.from.rank());
            if file_unique {
                san.push(file_char(mv.from));
            } else if rank_unique {
                san.push(rank_char(mv.from));
            } else {
                san.push(file_char(mv.from));
                san.push(rank_char(mv.from));
            }
        }
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if let Some(promo) = mv.promotion {
        san.push('=');
        san.push(promo.letter());
    }
    san
}

fn file_char(square: Square) -> char {
    (b'a' + square.file()) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.rank()) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(position: &Position, text: &str) -> Move {
        let (from, to, promo) = parse_coordinate(text).unwrap();
        legal_moves(position)
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promo)
            .unwrap()
    }

    #[test]
    fn test_parse_coordinate_accepts_promotions() {
        let (from, to, promo) = parse_coordinate("e7e8q").unwrap();
        assert_eq!(from.to_string(), "e7");
        assert_eq!(to.to_string(), "e8");
        assert_eq!(promo, Some(PieceKind::Queen));
        assert_eq!(parse_coordinate(" g1f3 ").unwrap().2, None);
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        for bad in ["", "e2", "e2e9", "e7e8k", "e7e8qq", "z1a1", "é2e4"] {
            assert!(
                matches!(
                    parse_coordinate(bad),
                    Err(ChessEngineError::InvalidMoveNotation { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_san_basic_moves() {
        let pos = Position::starting();
        assert_eq!(to_san(&pos, find(&pos, "g1f3")), "Nf3");
        assert_eq!(to_san(&pos, find(&pos, "e2e4")), "e4");
    }

    #[test]
    fn test_san_disambiguates_by_file_then_rank() {
        // Knights on b1 and f1 both reach d2; rooks on a1 and a5 both reach a3
        let pos = Position::from_fen("4k3/8/8/R7/8/8/8/RN2KN2 w - - 0 1").unwrap();
        assert_eq!(to_san(&pos, find(&pos, "b1d2")), "Nbd2");
        assert_eq!(to_san(&pos, find(&pos, "a1a3")), "R1a3");
    }

    #[test]
    fn test_san_captures_promotion_and_mate_suffix() {
        let pos = Position::from_fen("3r2k1/4Pppp/8/8/8/8/5PPP/6K1 w - - 0 1").unwrap();
        assert_eq!(to_san(&pos, find(&pos, "e7d8q")), "exd8=Q#");
        assert_eq!(to_san(&pos, find(&pos, "e7e8r")), "e8=R+");
        assert_eq!(to_san(&pos, find(&pos, "e7e8n")), "e8=N");
    }

    #[test]
    fn test_san_castling_and_check() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert_eq!(to_san(&pos, find(&pos, "e1g1")), "O-O");
        assert_eq!(to_san(&pos, find(&pos, "e1c1")), "O-O-O");
        assert_eq!(to_san(&pos, find(&pos, "a1a8")), "Ra8+");
    }
}
