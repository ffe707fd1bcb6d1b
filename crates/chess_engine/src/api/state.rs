//! Game state queries
//!
//! The status state machine is re-evaluated after every apply, undo and
//! reset. Precedence when several conditions hold at once:
//!
//! 1. No legal moves: `Checkmate` if in check, else `Stalemate`
//! 2. Halfmove clock at 100 or more: `DrawByFiftyMove`
//! 3. Current position seen for the third time: `DrawByRepetition`
//! 4. In check: `Check`
//! 5. Otherwise `InProgress`

use super::game::Game;
use crate::constants::FIFTY_MOVE_HALFMOVES;
use crate::evaluation::piece_value;
use crate::hash::{is_repetition_draw, PositionKey};
use crate::move_gen::{has_legal_move, is_in_check};
use crate::position::Position;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// Side to move is in check but has legal moves
    Check,
    Checkmate,
    Stalemate,
    DrawByFiftyMove,
    DrawByRepetition,
}

impl GameStatus {
    /// Checkmate, stalemate and both draws end the game
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check)
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::DrawByFiftyMove | GameStatus::DrawByRepetition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawByFiftyMove => "draw by fifty-move rule",
            GameStatus::DrawByRepetition => "draw by threefold repetition",
        };
        f.write_str(text)
    }
}

/// Status of `position`, given the key of every position reached so far
/// (current last)
pub(super) fn compute_status(position: &Position, keys: &[PositionKey]) -> GameStatus {
    let in_check = is_in_check(position, position.side_to_move);

    if !has_legal_move(position) {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return GameStatus::DrawByFiftyMove;
    }
    if is_repetition_draw(keys, position.halfmove_clock) {
        return GameStatus::DrawByRepetition;
    }
    if in_check {
        GameStatus::Check
    } else {
        GameStatus::InProgress
    }
}

impl Game {
    /// Get current game state
    pub fn current_state(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winner when the game ended in checkmate
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.position.side_to_move.opponent()),
            _ => None,
        }
    }

    /// Pieces captured by `by`, in capture order
    pub fn captured_pieces(&self, by: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter(|played| played.record.moved.color == by)
            .filter_map(|played| played.record.captured.map(|(piece, _)| piece))
            .collect()
    }

    /// Material value of everything `by` has captured
    pub fn material_captured(&self, by: Color) -> i32 {
        self.captured_pieces(by)
            .iter()
            .map(|piece| piece_value(piece.kind))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_coordinate;

    fn play_all(game: &mut Game, moves: &[&str]) {
        for text in moves {
            let (from, to, promo) = parse_coordinate(text).unwrap();
            let mv = game.find_move(from, to, promo).unwrap();
            game.apply_move(mv).unwrap();
        }
    }

    #[test]
    fn test_check_is_informational() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "f7f6", "d1h5"]);
        assert_eq!(game.current_state(), GameStatus::Check);
        assert!(!game.is_over());
    }

    #[test]
    fn test_stalemate_detected() {
        let game = Game::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").unwrap();
        assert_eq!(game.current_state(), GameStatus::Stalemate);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_fifty_move_rule() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 70").unwrap();
        assert_eq!(game.current_state(), GameStatus::InProgress);
        play_all(&mut game, &["a1a2"]);
        assert_eq!(game.current_state(), GameStatus::DrawByFiftyMove);
    }

    #[test]
    fn test_checkmate_outranks_fifty_move_rule() {
        let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 70").unwrap();
        play_all(&mut game, &["a1a8"]);
        assert_eq!(game.current_state(), GameStatus::Checkmate);
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn test_threefold_repetition() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        play_all(&mut game, &shuffle);
        assert_eq!(game.current_state(), GameStatus::InProgress);
        play_all(&mut game, &shuffle);
        assert_eq!(game.current_state(), GameStatus::DrawByRepetition);
    }

    #[test]
    fn test_captured_material_tracking() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2"]);
        assert_eq!(
            game.captured_pieces(Color::White),
            vec![Piece::new(Color::Black, PieceKind::Pawn)]
        );
        assert_eq!(game.material_captured(Color::Black), 2);
        assert_eq!(game.captured_pieces(Color::Black).len(), 2);
    }
}
