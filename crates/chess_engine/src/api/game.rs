//! Game lifecycle management
//!
//! Creating and resetting games, read access to the tracked state, and the
//! two halves of an AI turn: [`Game::search_request`] snapshots the game for
//! the worker, [`Game::apply_search_outcome`] applies the answer if it still
//! belongs to the current position.

use super::state::{compute_status, GameStatus};
use crate::error::ChessEngineResult;
use crate::hash::PositionKey;
use crate::position::{MoveRecord, Position};
use crate::scheduler::{SearchOutcome, SearchRequest, SearchTicket};
use crate::types::*;
use tracing::{info, warn};

/// One applied move with its notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub record: MoveRecord,
    /// Standard algebraic notation, computed before the move was applied
    pub san: String,
}

/// Game state tracker
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) initial: Position,
    pub(super) position: Position,
    pub(super) history: Vec<PlayedMove>,
    /// Key of every position reached, the current one last
    pub(super) keys: Vec<PositionKey>,
    pub(super) status: GameStatus,
    pub(super) revision: u64,
}

impl Game {
    /// Create a new game with the standard initial position
    pub fn new() -> Self {
        Self::from_position(Position::starting())
    }

    /// Create a game from a FEN string
    ///
    /// # Errors
    ///
    /// [`crate::ChessEngineError::InvalidFen`] if the string does not parse.
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Create a game starting from an arbitrary position
    pub fn from_position(position: Position) -> Self {
        let keys = vec![position.key()];
        let status = compute_status(&position, &keys);
        Game {
            initial: position,
            position,
            history: Vec::new(),
            keys,
            status,
            revision: 0,
        }
    }

    /// Return to the position the game was created with and clear history
    pub fn reset(&mut self) {
        self.position = self.initial;
        self.history.clear();
        self.keys.clear();
        self.keys.push(self.position.key());
        self.status = compute_status(&self.position, &self.keys);
        self.revision += 1;
        info!(revision = self.revision, "[GAME] Game reset");
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Applied moves, oldest first
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// SAN of every applied move, oldest first
    pub fn notation(&self) -> Vec<&str> {
        self.history.iter().map(|played| played.san.as_str()).collect()
    }

    /// Monotonic counter bumped by every apply, undo and reset
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Identity of the current state, attached to search requests
    pub fn ticket(&self) -> SearchTicket {
        SearchTicket {
            revision: self.revision,
            key: self.position.key(),
        }
    }

    /// Snapshot the game for a search worker
    pub fn search_request(&self, depth: u8) -> SearchRequest {
        SearchRequest {
            ticket: self.ticket(),
            position: self.position,
            history: self.keys[..self.keys.len() - 1].to_vec(),
            depth,
        }
    }

    /// Apply a finished search if it was computed for the current state
    ///
    /// Returns `Ok(None)` without touching the game when the outcome is
    /// stale (the game moved on, was undone or reset since the request) or
    /// when the search found no move.
    ///
    /// # Errors
    ///
    /// Whatever [`Game::apply_move`] reports for the chosen move.
    pub fn apply_search_outcome(
        &mut self,
        outcome: &SearchOutcome,
    ) -> ChessEngineResult<Option<MoveRecord>> {
        let current = self.ticket();
        if outcome.ticket != current {
            warn!(
                requested_revision = outcome.ticket.revision,
                current_revision = current.revision,
                "[GAME] Discarding stale search result"
            );
            return Ok(None);
        }

        match outcome.result.best_move {
            Some(mv) => self.apply_move(mv).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessEngineError;
    use crate::search::search;
    use std::time::Duration;

    fn outcome_for(game: &Game, depth: u8) -> SearchOutcome {
        let request = game.search_request(depth);
        SearchOutcome {
            ticket: request.ticket,
            result: search(&request.position, depth),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.position(), &Position::starting());
        assert_eq!(game.current_state(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.revision(), 0);
    }

    #[test]
    fn test_reset_restores_initial_position_and_bumps_revision() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let start = *game.position();
        let mv = game.find_move(Square::new(4, 1), Square::new(4, 3), None).unwrap();
        game.apply_move(mv).unwrap();

        game.reset();
        assert_eq!(game.position(), &start);
        assert!(game.history().is_empty());
        assert_eq!(game.revision(), 2);
    }

    #[test]
    fn test_search_request_excludes_current_key_from_history() {
        let mut game = Game::new();
        let mv = game.legal_moves()[0];
        game.apply_move(mv).unwrap();

        let request = game.search_request(2);
        assert_eq!(request.history, vec![Position::starting().key()]);
        assert_eq!(request.position, *game.position());
        assert_eq!(request.ticket, game.ticket());
    }

    #[test]
    fn test_fresh_outcome_is_applied() {
        let mut game = Game::new();
        let outcome = outcome_for(&game, 1);
        let record = game.apply_search_outcome(&outcome).unwrap();
        assert!(record.is_some());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut game = Game::new();
        let outcome = outcome_for(&game, 1);

        // Same position again, but a different revision
        let mv = game.legal_moves()[0];
        game.apply_move(mv).unwrap();
        game.undo_move().unwrap();
        assert_eq!(game.position(), &Position::starting());

        assert_eq!(game.apply_search_outcome(&outcome).unwrap(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_from_fen_with_maximal_clocks() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 65535 1").unwrap();
        assert_eq!(game.current_state(), GameStatus::DrawByFiftyMove);

        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 65535").unwrap();
        assert_eq!(game.current_state(), GameStatus::InProgress);
        let mv = game.legal_moves()[0];
        game.apply_move(mv).unwrap();
        assert_eq!(game.position().fullmove_number, u16::MAX);
    }

    #[test]
    fn test_from_fen_refuses_capturable_king() {
        assert!(matches!(
            Game::from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1"),
            Err(ChessEngineError::InvalidFen { .. })
        ));
    }
}
