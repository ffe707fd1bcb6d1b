//! Position aggregate and in-place move execution
//!
//! A [`Position`] is the full rule state: board, side to move, castling
//! rights, en-passant target and the two move counters. It is `Copy`
//! (~140 bytes), so the search and the legality filter work on cheap copies
//! and never share mutable state.
//!
//! [`Position::make_move`] executes a move without validating it and returns
//! a [`MoveRecord`] holding everything needed by [`Position::unmake_move`] to
//! restore the previous position exactly.

use crate::board::Board;
use crate::hash::{position_key, PositionKey};
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped with its double push, only for the very next move
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

/// Undo information for one applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    /// Piece that stood on the origin square (the pawn, for promotions)
    pub moved: Piece,
    /// Captured piece and the square it stood on (differs from `mv.to` for en passant)
    pub captured: Option<(Piece, Square)>,
    pub prior_castling: CastlingRights,
    pub prior_en_passant: Option<Square>,
    pub prior_halfmove_clock: u16,
    pub prior_fullmove_number: u16,
}

/// Rook origin and destination for a castling move of `color`
pub(crate) fn castle_rook_squares(color: Color, kind: MoveKind) -> Option<(Square, Square)> {
    let rank = color.back_rank();
    match kind {
        MoveKind::CastleKingside => Some((Square::new(7, rank), Square::new(5, rank))),
        MoveKind::CastleQueenside => Some((Square::new(0, rank), Square::new(3, rank))),
        _ => None,
    }
}

impl Position {
    /// Standard initial position, White to move
    pub fn starting() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Empty board with no rights, for hand-built test positions
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: Board::empty(),
            side_to_move,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn key(&self) -> PositionKey {
        position_key(self)
    }

    /// Execute `mv` for the side to move without any legality check.
    ///
    /// The origin square must hold a piece of the side to move; generator
    /// output always satisfies this.
    pub fn make_move(&mut self, mv: Move) -> MoveRecord {
        let mover = self.side_to_move;
        let moved = self
            .board
            .take(mv.from)
            .unwrap_or(Piece::new(mover, PieceKind::Pawn));

        let captured = if mv.kind == MoveKind::EnPassant {
            let victim_square = Square::new(mv.to.file(), mv.from.rank());
            self.board.take(victim_square).map(|p| (p, victim_square))
        } else {
            self.board.take(mv.to).map(|p| (p, mv.to))
        };

        let record = MoveRecord {
            mv,
            moved,
            captured,
            prior_castling: self.castling,
            prior_en_passant: self.en_passant,
            prior_halfmove_clock: self.halfmove_clock,
            prior_fullmove_number: self.fullmove_number,
        };

        let placed = match mv.promotion {
            Some(kind) => Piece::new(mover, kind),
            None => moved,
        };
        self.board.set(mv.to, Some(placed));

        if let Some((rook_from, rook_to)) = castle_rook_squares(mover, mv.kind) {
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        self.en_passant = match mv.kind {
            MoveKind::DoublePawnPush => mv.from.offset(0, mover.pawn_direction()),
            _ => None,
        };

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opponent();

        record
    }

    /// Exact inverse of [`Position::make_move`]
    pub fn unmake_move(&mut self, record: &MoveRecord) {
        let mv = record.mv;
        let mover = record.moved.color;

        self.board.set(mv.to, None);
        self.board.set(mv.from, Some(record.moved));

        if let Some((rook_from, rook_to)) = castle_rook_squares(mover, mv.kind) {
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        if let Some((piece, square)) = record.captured {
            self.board.set(square, Some(piece));
        }

        self.castling = record.prior_castling;
        self.en_passant = record.prior_en_passant;
        self.halfmove_clock = record.prior_halfmove_clock;
        self.fullmove_number = record.prior_fullmove_number;
        self.side_to_move = mover;
    }

    /// Copy of this position with `mv` applied
    pub fn after(&self, mv: Move) -> Position {
        let mut next = *self;
        next.make_move(mv);
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}
