//! Public API for the chess engine
//!
//! [`Game`] is the game state tracker: it owns the current position, the
//! undo history and the derived [`GameStatus`]. Every mutation goes through
//! it, human and AI moves alike.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle, accessors and search hand-off
//! - `moves` - Move lookup, execution and undo
//! - `state` - Status state machine and material tracking

mod game;
mod moves;
mod state;

pub use game::{Game, PlayedMove};
pub use state::GameStatus;
