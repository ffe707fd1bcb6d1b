//! Typed command parsing
//!
//! One line of input is either a keyword command or a move in coordinate
//! notation (`e2e4`, `e7e8q`).

use super::error::{GameError, GameResult};
use chess_engine::{parse_coordinate, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Undo,
    Reset,
    /// List legal moves
    Moves,
    Fen,
    History,
    Help,
    Quit,
}

/// Parse one line of user input
///
/// # Errors
///
/// - [`GameError::InvalidCommand`] for unknown words and empty input
/// - [`GameError::Engine`] wrapping `InvalidMoveNotation` for text shaped
///   like a move that does not parse
pub fn parse_command(line: &str) -> GameResult<Command> {
    let text = line.trim();
    let command = match text.to_ascii_lowercase().as_str() {
        "undo" | "u" => Command::Undo,
        "reset" | "new" => Command::Reset,
        "moves" | "m" => Command::Moves,
        "fen" => Command::Fen,
        "history" | "h" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if looks_like_move(text) => {
            let (from, to, promotion) = parse_coordinate(text)?;
            Command::Move {
                from,
                to,
                promotion,
            }
        }
        _ => {
            return Err(GameError::InvalidCommand {
                input: text.to_string(),
            })
        }
    };
    Ok(command)
}

/// File letter followed by a rank digit
fn looks_like_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit()
}
