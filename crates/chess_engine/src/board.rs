//! Board storage
//!
//! Pure piece placement: 64 optional pieces, no rule knowledge. Legality is
//! entirely the move generator's job.

use crate::types::*;
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard initial layout
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for file in 0..8u8 {
            let kind = BACK_RANK[file as usize];
            board.set(Square::new(file, 0), Some(Piece::new(Color::White, kind)));
            board.set(Square::new(file, 1), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square::new(file, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square::new(file, 7), Some(Piece::new(Color::Black, kind)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Remove and return whatever stands on `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|piece| (Square::from_index(i), piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Rank 8 at the top, `.` for empty squares
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let c = self
                    .get(Square::new(file, rank))
                    .map(Piece::fen_char)
                    .unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_board_layout() {
        let board = Board::starting();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(Square::parse("e1").unwrap()),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::parse("d8").unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(board.is_empty(Square::parse("e4").unwrap()));
    }

    #[test]
    fn test_set_and_take() {
        let mut board = Board::empty();
        let sq = Square::parse("c3").unwrap();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        board.set(sq, Some(knight));
        assert_eq!(board.get(sq), Some(knight));
        assert_eq!(board.take(sq), Some(knight));
        assert!(board.is_empty(sq));
    }

    #[test]
    fn test_king_square_lookup() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(Square::new(4, 0)));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(4, 7)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_display_shows_rank_eight_first() {
        let text = Board::starting().to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "rnbqkbnr");
        assert_eq!(text.lines().nth(4).unwrap(), "........");
    }
}
