//! # Chess Engine
//!
//! Full-rules chess with a depth-limited minimax AI.
//!
//! ## Components (leaf first)
//!
//! - [`board`] / [`position`] - Piece placement and the full rule state,
//!   with exact make/unmake
//! - [`move_gen`] - Pseudo-legal and legal move generation, attack detection
//! - [`api`] - [`Game`], the state tracker: apply/undo, history and the
//!   check/mate/draw state machine
//! - [`evaluation`] - Material count from White's point of view
//! - [`search`] - Alpha-beta minimax returning a [`SearchResult`]
//! - [`scheduler`] - Runs searches on a worker thread, results tagged with a
//!   [`SearchTicket`] so stale ones can be dropped
//!
//! Supporting modules: [`fen`], [`notation`] (coordinate and SAN),
//! [`hash`] (repetition keys) and [`perft`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{Game, SearchScheduler};
//!
//! let mut game = Game::new();
//! let mut scheduler = SearchScheduler::new();
//! scheduler.request(game.search_request(3))?;
//! // ... each frame:
//! if let Some(outcome) = scheduler.poll()? {
//!     game.apply_search_outcome(&outcome)?;
//! }
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod fen;
pub mod hash;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod scheduler;
pub mod search;
pub mod types;

pub use api::{Game, GameStatus, PlayedMove};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate;
pub use hash::PositionKey;
pub use move_gen::{is_attacked, is_in_check, legal_moves, pseudo_legal_moves};
pub use notation::{parse_coordinate, to_san};
pub use perft::{perft, perft_divide};
pub use position::{MoveRecord, Position};
pub use scheduler::{SearchOutcome, SearchRequest, SearchScheduler, SearchTicket};
pub use search::{
    search, search_unpruned, search_until_stopped, search_with_history, SearchResult,
};
pub use types::*;
