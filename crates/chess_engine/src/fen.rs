//! Forsyth-Edwards Notation
//!
//! Parses and prints the six FEN fields: placement, side to move, castling
//! rights, en-passant target, halfmove clock and fullmove number. The two
//! clocks may be omitted on input and default to `0 1`.
//!
//! Parsing validates shape (eight ranks of eight files, known piece letters)
//! and the rules the move generator relies on:
//!
//! - exactly one king per side
//! - the side that just moved is not left in check
//! - an en-passant target is empty and sits behind an opposing pawn
//!
//! It does not check that the position is reachable.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::is_in_check;
use crate::position::Position;
use crate::types::*;

fn invalid(message: impl Into<String>) -> ChessEngineError {
    ChessEngineError::InvalidFen {
        message: message.into(),
    }
}

impl Position {
    /// Build a position from a FEN string
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidFen`] describing the first malformed field.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pos = Position::from_fen("8/8/8/8/8/8/8/4K2k w - - 0 1")?;
    /// ```
    pub fn from_fen(fen: &str) -> ChessEngineResult<Position> {
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or_else(|| invalid("missing board layout"))?;
        let side = parts.next().ok_or_else(|| invalid("missing side to move"))?;
        let castling = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
        let en_passant = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
        let halfmove = parts.next().unwrap_or("0");
        let fullmove = parts.next().unwrap_or("1");

        if parts.next().is_some() {
            return Err(invalid("extra trailing fields"));
        }

        let board = parse_board(placement)?;
        for color in Color::ALL {
            let kings = board
                .pieces()
                .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(invalid(format!("{color} must have exactly one king, found {kings}")));
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(invalid(format!("invalid side to move '{other}'"))),
        };

        let en_passant = parse_en_passant(en_passant, &board, side_to_move)?;
        let position = Position {
            board,
            side_to_move,
            castling: parse_castling(castling)?,
            en_passant,
            halfmove_clock: halfmove
                .parse()
                .map_err(|_| invalid(format!("invalid halfmove clock '{halfmove}'")))?,
            fullmove_number: fullmove
                .parse()
                .map_err(|_| invalid(format!("invalid fullmove number '{fullmove}'")))?,
        };

        let waiting = side_to_move.opponent();
        if is_in_check(&position, waiting) {
            return Err(invalid(format!("{waiting} is in check but it is not their move")));
        }
        Ok(position)
    }

    /// Six-field FEN for this position
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.board.get(Square::new(file, rank)) {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = [
            (self.castling.white_kingside, 'K'),
            (self.castling.white_queenside, 'Q'),
            (self.castling.black_kingside, 'k'),
            (self.castling.black_queenside, 'q'),
        ];
        let before = fen.len();
        fen.extend(rights.iter().filter(|(set, _)| *set).map(|(_, c)| *c));
        if fen.len() == before {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

fn parse_board(placement: &str) -> ChessEngineResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            if let Some(step) = ch.to_digit(10) {
                if !(1..=8).contains(&step) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += step as u8;
            } else {
                let piece = Piece::from_fen_char(ch)
                    .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
                if file >= 8 {
                    return Err(invalid(format!("rank {} has too many files", rank + 1)));
                }
                board.set(Square::new(file, rank), Some(piece));
                file += 1;
            }
            if file > 8 {
                return Err(invalid(format!("rank {} has too many files", rank + 1)));
            }
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    Ok(board)
}

fn parse_castling(text: &str) -> ChessEngineResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if text == "-" {
        return Ok(rights);
    }
    for ch in text.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            other => return Err(invalid(format!("invalid castling flag '{other}'"))),
        }
    }
    Ok(rights)
}

fn parse_en_passant(text: &str, board: &Board, side_to_move: Color) -> ChessEngineResult<Option<Square>> {
    if text == "-" {
        return Ok(None);
    }
    let square = Square::parse(text).map_err(|_| invalid(format!("invalid en-passant square '{text}'")))?;
    // The target sits behind the pawn that just double-pushed
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(invalid(format!("en-passant square '{text}' is on the wrong rank")));
    }

    let pushed = square
        .offset(0, side_to_move.opponent().pawn_direction())
        .and_then(|behind| board.get(behind));
    if pushed != Some(Piece::new(side_to_move.opponent(), PieceKind::Pawn)) || !board.is_empty(square) {
        return Err(invalid(format!(
            "en-passant square '{text}' has no pawn that just double-pushed"
        )));
    }
    Ok(Some(square))
}
