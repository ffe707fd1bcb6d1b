//! Move execution and validation
//!
//! Functions for looking up, executing and undoing moves on a [`Game`].

use super::game::{Game, PlayedMove};
use super::state::compute_status;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::legal_moves;
use crate::notation::to_san;
use crate::position::MoveRecord;
use crate::types::*;
use tracing::debug;

impl Game {
    /// Legal moves in the current position, in generation order
    ///
    /// Empty once the game is over by checkmate or stalemate. Draws by rule
    /// still list moves, but [`Game::apply_move`] refuses them.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Find the legal move matching UI input
    ///
    /// A pawn reaching the last rank with no promotion given matches nothing,
    /// since every such move carries a promotion piece.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mv = game.find_move(Square::parse("e1")?, Square::parse("g1")?, None);
    /// // Some(castle kingside) if castling is legal
    /// ```
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Execute a legal move
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::GameOver`] if the game already ended
    /// - [`ChessEngineError::IllegalMove`] if `mv` is not among
    ///   [`Game::legal_moves`]
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mv = game.find_move(e2, e4, None).ok_or(...)?;
    /// let record = game.apply_move(mv)?;
    /// ```
    pub fn apply_move(&mut self, mv: Move) -> ChessEngineResult<MoveRecord> {
        if self.status.is_terminal() {
            return Err(ChessEngineError::GameOver {
                status: self.status,
            });
        }
        if !self.is_legal(mv) {
            return Err(ChessEngineError::IllegalMove {
                mv: mv.to_string(),
            });
        }

        let san = to_san(&self.position, mv);
        let record = self.position.make_move(mv);
        self.keys.push(self.position.key());
        self.history.push(PlayedMove {
            record,
            san: san.clone(),
        });
        self.revision += 1;

        let previous = self.status;
        self.status = compute_status(&self.position, &self.keys);
        debug!(
            mv = %mv,
            san = %san,
            status = ?self.status,
            revision = self.revision,
            "[GAME] Move applied"
        );
        if self.status != previous {
            debug!(from = ?previous, to = ?self.status, "[GAME] Status changed");
        }

        Ok(record)
    }

    /// Take back the most recent move
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::NoMoveToUndo`] when no move has been played.
    pub fn undo_move(&mut self) -> ChessEngineResult<MoveRecord> {
        let played = self.history.pop().ok_or(ChessEngineError::NoMoveToUndo)?;
        self.position.unmake_move(&played.record);
        self.keys.pop();
        self.revision += 1;
        self.status = compute_status(&self.position, &self.keys);
        debug!(
            mv = %played.record.mv,
            revision = self.revision,
            "[GAME] Move undone"
        );
        Ok(played.record)
    }
}
