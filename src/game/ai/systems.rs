//! AI turn control: dispatch searches and apply their results
//!
//! [`AiTurnController::tick`] is called once per frame by the session. It
//! does two things, never blocking:
//!
//! 1. Poll the scheduler. A finished search is applied through
//!    [`Game::apply_search_outcome`], which drops results computed for a
//!    position that is no longer current.
//! 2. If it is the AI's turn and nothing is in flight, snapshot the game and
//!    dispatch a new search.

use super::resource::ChessAIResource;
use crate::game::error::GameResult;
use chess_engine::{Game, Move, SearchScheduler};
use std::time::Duration;
use tracing::{info, warn};

/// AI move representation with engine statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AIMove {
    pub mv: Move,
    pub san: String,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub thinking_time: Duration,
}

/// Running AI statistics for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AIStatistics {
    pub last_score: i32,
    pub last_depth: u8,
    pub last_nodes: u64,
    pub thinking_time: f32,
    /// Searches whose move was played
    pub moves_played: u32,
    /// Searches thrown away because the game changed underneath them
    pub discarded: u32,
}

/// Owns the search scheduler on behalf of the interactive loop
#[derive(Debug, Default)]
pub struct AiTurnController {
    scheduler: SearchScheduler,
    stats: AIStatistics,
}

impl AiTurnController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &AIStatistics {
        &self.stats
    }

    /// True while a search is outstanding
    pub fn is_thinking(&self) -> bool {
        self.scheduler.is_busy()
    }

    /// Drop the outstanding search, if any
    pub fn cancel(&mut self) {
        if self.scheduler.cancel().is_some() {
            self.stats.discarded += 1;
            info!("[AI] Pending search cancelled");
        }
    }

    /// Poll for a finished search, then dispatch a new one if needed
    ///
    /// Returns the AI move applied during this tick, if any.
    ///
    /// # Errors
    ///
    /// Scheduler failures (worker died, spawn failed) and any error applying
    /// the chosen move.
    pub fn tick(&mut self, game: &mut Game, config: &ChessAIResource) -> GameResult<Option<AIMove>> {
        let applied = match self.scheduler.poll()? {
            Some(outcome) => self.apply(game, &outcome)?,
            None => None,
        };

        if !should_skip_ai_spawn(&self.scheduler, game, config) {
            let request = game.search_request(config.search_depth());
            info!(
                side = %game.side_to_move(),
                depth = request.depth,
                difficulty = config.difficulty.description(),
                ply = game.history().len() + 1,
                "[AI] Dispatching search"
            );
            self.scheduler.request(request)?;
        }

        Ok(applied)
    }

    /// Block until the outstanding search finishes and apply it
    ///
    /// Returns `Ok(None)` when nothing was pending or the result was stale.
    ///
    /// # Errors
    ///
    /// Same as [`AiTurnController::tick`].
    pub fn wait(&mut self, game: &mut Game) -> GameResult<Option<AIMove>> {
        match self.scheduler.wait()? {
            Some(outcome) => self.apply(game, &outcome),
            None => Ok(None),
        }
    }

    fn apply(
        &mut self,
        game: &mut Game,
        outcome: &chess_engine::SearchOutcome,
    ) -> GameResult<Option<AIMove>> {
        let Some(record) = game.apply_search_outcome(outcome)? else {
            if outcome.ticket != game.ticket() {
                self.stats.discarded += 1;
            } else {
                warn!("[AI] Search returned no move");
            }
            return Ok(None);
        };

        let result = outcome.result;
        let san = game
            .last_move()
            .map(|played| played.san.clone())
            .unwrap_or_else(|| record.mv.to_string());

        self.stats.last_score = result.score;
        self.stats.last_depth = result.depth;
        self.stats.last_nodes = result.nodes;
        self.stats.thinking_time = outcome.elapsed.as_secs_f32();
        self.stats.moves_played += 1;

        info!(
            mv = %san,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            time = format!("{:.2}s", self.stats.thinking_time),
            "[AI] Move played"
        );

        Ok(Some(AIMove {
            mv: record.mv,
            san,
            score: result.score,
            depth: result.depth,
            nodes_searched: result.nodes,
            thinking_time: outcome.elapsed,
        }))
    }
}

/// Helper to check conditions for dispatching a search
fn should_skip_ai_spawn(scheduler: &SearchScheduler, game: &Game, config: &ChessAIResource) -> bool {
    if scheduler.is_busy() {
        return true;
    }

    if game.is_over() {
        return true;
    }

    !config.mode.is_ai_turn(game.side_to_move())
}
