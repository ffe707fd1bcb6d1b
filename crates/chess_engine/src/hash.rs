//! Position keys for repetition detection
//!
//! A [`PositionKey`] packs everything that makes two positions "the same"
//! under the repetition rule: piece placement, side to move, castling rights
//! and en-passant target. Clocks are not part of the key.
//!
//! The key is exact rather than a Zobrist-style digest, so equal keys mean
//! equal positions with no collision risk. Two squares share one byte:
//! low nibble for the even square, high nibble for the odd one.

use crate::constants::REPETITION_LIMIT;
use crate::position::Position;
use crate::types::*;

const NO_EN_PASSANT: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    squares: [u8; 32],
    flags: u8,
    en_passant: u8,
}

/// 0 = empty, 1-6 white pawn..king, 9-14 black pawn..king
fn piece_code(piece: Option<Piece>) -> u8 {
    match piece {
        None => 0,
        Some(p) => {
            let kind = match p.kind {
                PieceKind::Pawn => 1,
                PieceKind::Knight => 2,
                PieceKind::Bishop => 3,
                PieceKind::Rook => 4,
                PieceKind::Queen => 5,
                PieceKind::King => 6,
            };
            match p.color {
                Color::White => kind,
                Color::Black => kind | 0x8,
            }
        }
    }
}

/// Build the repetition key of a position
pub fn position_key(position: &Position) -> PositionKey {
    let mut squares = [0u8; 32];
    for sq in Square::all() {
        let code = piece_code(position.board.get(sq));
        let shift = if sq.index() % 2 == 0 { 0 } else { 4 };
        squares[sq.index() / 2] |= code << shift;
    }

    let side = match position.side_to_move {
        Color::White => 0,
        Color::Black => 1,
    };

    PositionKey {
        squares,
        flags: side | position.castling.bits() << 1,
        en_passant: position
            .en_passant
            .map(|sq| sq.index() as u8)
            .unwrap_or(NO_EN_PASSANT),
    }
}

/// Occurrences of the last key in `keys` within the reversible window
///
/// `keys` is the game's key sequence ending with the current position. Only
/// the last `halfmove_clock + 1` entries can repeat it: anything older lies
/// behind a capture or pawn move.
pub fn repetition_count(keys: &[PositionKey], halfmove_clock: u16) -> usize {
    let Some(current) = keys.last() else {
        return 0;
    };
    let window = (halfmove_clock as usize + 1).min(keys.len());
    keys[keys.len() - window..]
        .iter()
        .filter(|key| *key == current)
        .count()
}

/// True once the current position has occurred [`REPETITION_LIMIT`] times
#[inline]
pub fn is_repetition_draw(keys: &[PositionKey], halfmove_clock: u16) -> bool {
    repetition_count(keys, halfmove_clock) >= REPETITION_LIMIT
}
