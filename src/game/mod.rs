//! Game layer on top of `chess_engine`
//!
//! The engine crate owns the rules, the search and the background
//! scheduler. This module adds what an interactive program needs:
//!
//! - `ai` - game mode, difficulty and the AI turn controller
//! - `input` - typed command parsing
//! - `session` - [`GameSession`], the command interface driven by `main`
//! - `error` - [`GameError`] for input and turn errors

pub mod ai;
pub mod error;
pub mod input;
pub mod session;

pub use ai::{AIDifficulty, AIMove, AIStatistics, AiTurnController, ChessAIResource, GameMode};
pub use error::{GameError, GameResult};
pub use input::{parse_command, Command};
pub use session::{GameSession, Reply};
