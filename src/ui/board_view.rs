//! Text rendering of the game for the terminal
//!
//! Provides the in-game display:
//! - Board diagram with FEN piece letters (uppercase White)
//! - Move list in numbered algebraic notation
//! - Turn and status line
//! - AI statistics after each engine move

use crate::game::ai::{AIMove, AIStatistics};
use chess_engine::{Color, Game, GameStatus, Move, Position, Square};
use std::fmt::Write;

/// Draw the board from `perspective`'s side
///
/// Empty squares are `.`; file letters run along the bottom.
pub fn render_board(position: &Position, perspective: Color) -> String {
    let ranks: Vec<u8> = match perspective {
        Color::White => (0..8).rev().collect(),
        Color::Black => (0..8).collect(),
    };
    let files: Vec<u8> = match perspective {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    let mut out = String::new();
    for &rank in &ranks {
        let _ = write!(out, "{} ", rank + 1);
        for &file in &files {
            let symbol = position
                .board
                .get(Square::new(file, rank))
                .map_or('.', |piece| piece.fen_char());
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push(' ');
        out.push(char::from(b'a' + file));
    }
    out.push('\n');
    out
}

/// Numbered move list, e.g. `1. e4 e5 2. Nf3`
///
/// Games started from a position with Black to move open with `1...`.
pub fn render_move_list(game: &Game) -> String {
    let mut out = String::new();
    let mut number = game.history().first().map_or(1, |played| played.record.prior_fullmove_number);

    for played in game.history() {
        let first = out.is_empty();
        match played.record.moved.color {
            Color::White => {
                if !first {
                    out.push(' ');
                }
                let _ = write!(out, "{number}. {}", played.san);
            }
            Color::Black => {
                if first {
                    let _ = write!(out, "{number}... {}", played.san);
                } else {
                    let _ = write!(out, " {}", played.san);
                }
                number += 1;
            }
        }
    }
    out
}

/// One line summarizing whose turn it is, or how the game ended
pub fn render_status(game: &Game) -> String {
    let side = game.side_to_move();
    match game.current_state() {
        GameStatus::InProgress => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move (check)"),
        GameStatus::Checkmate => {
            format!("Checkmate! {} wins", side.opponent())
        }
        status => format!("Game drawn: {status}"),
    }
}

pub fn render_ai_move(ai_move: &AIMove, stats: &AIStatistics) -> String {
    format!(
        "AI plays {} (score {}, depth {}, {} nodes, {:.2}s)",
        ai_move.san, ai_move.score, ai_move.depth, ai_move.nodes_searched, stats.thinking_time
    )
}

/// Space separated coordinate notation
pub fn render_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub const HELP_TEXT: &str = "\
Commands:
  e2e4, e7e8q   play a move (coordinate notation, promotion letter last)
  moves         list legal moves
  undo          take back your last move
  reset         start over from the initial position
  history       show the move list
  fen           print the current position as FEN
  help          show this text
  quit          leave the game";

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::parse_coordinate;

    fn play(game: &mut Game, moves: &[&str]) {
        for text in moves {
            let (from, to, promo) = parse_coordinate(text).unwrap();
            let mv = game.find_move(from, to, promo).unwrap();
            game.apply_move(mv).unwrap();
        }
    }

    #[test]
    fn test_starting_board_white_perspective() {
        let text = render_board(&Position::starting(), Color::White);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn test_black_perspective_flips_board() {
        let text = render_board(&Position::starting(), Color::Black);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1  R N B K Q B N R");
        assert_eq!(lines[8], "   h g f e d c b a");
    }

    #[test]
    fn test_move_list_numbering() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);
        assert_eq!(render_move_list(&game), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn test_move_list_from_black_to_move() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R b K - 0 12").unwrap();
        play(&mut game, &["e8d8", "e1g1"]);
        assert_eq!(render_move_list(&game), "12... Kd8 13. O-O");
    }

    #[test]
    fn test_status_line() {
        let mut game = Game::new();
        assert_eq!(render_status(&game), "White to move");
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(render_status(&game), "Checkmate! Black wins");
    }
}
