//! Interactive game session
//!
//! Ties the engine [`Game`], the AI configuration and the AI controller
//! together behind a command interface. The terminal front end feeds it one
//! parsed line at a time and calls [`GameSession::tick`] on every frame.
//!
//! Human commands never block on the AI. Undo and reset cancel any search
//! in flight; even if a cancelled worker finishes later, its result carries
//! an outdated ticket and is dropped.

use super::ai::{AIMove, AIStatistics, AiTurnController, ChessAIResource, GameMode};
use super::error::{GameError, GameResult};
use super::input::{parse_command, Command};
use chess_engine::{ChessEngineError, Game, Move};
use tracing::info;

/// What a handled command produced, for the front end to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A human move was played; carries its SAN
    Moved(String),
    /// Number of plies taken back
    Undone(usize),
    Reset,
    Moves(Vec<Move>),
    Fen(String),
    History(Vec<String>),
    Help,
    Quit,
}

#[derive(Debug)]
pub struct GameSession {
    game: Game,
    config: ChessAIResource,
    ai: AiTurnController,
}

impl GameSession {
    pub fn new(game: Game, config: ChessAIResource) -> Self {
        info!(
            mode = ?config.mode,
            depth = config.search_depth(),
            "[GAME] Session started"
        );
        Self {
            game,
            config,
            ai: AiTurnController::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &ChessAIResource {
        &self.config
    }

    pub fn ai_stats(&self) -> &AIStatistics {
        self.ai.stats()
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.ai.is_thinking()
    }

    /// Whether the side to move is waiting on human input
    pub fn awaiting_human(&self) -> bool {
        !self.game.is_over() && !self.config.mode.is_ai_turn(self.game.side_to_move())
    }

    /// Parse and run one line of input
    ///
    /// # Errors
    ///
    /// Parse errors from [`parse_command`] and everything
    /// [`GameSession::handle_command`] can return.
    pub fn handle_line(&mut self, line: &str) -> GameResult<Reply> {
        let command = parse_command(line)?;
        self.handle_command(command)
    }

    /// Run one command
    ///
    /// # Errors
    ///
    /// - [`GameError::NotYourTurn`] for a move while the AI is to move
    /// - engine errors for illegal moves, moves after the game ended and
    ///   undo with no history
    pub fn handle_command(&mut self, command: Command) -> GameResult<Reply> {
        match command {
            Command::Move {
                from,
                to,
                promotion,
            } => {
                if self.game.is_over() {
                    return Err(ChessEngineError::GameOver {
                        status: self.game.current_state(),
                    }
                    .into());
                }
                let side = self.game.side_to_move();
                if self.config.mode.is_ai_turn(side) {
                    return Err(GameError::NotYourTurn { side });
                }
                let mv = self.game.find_move(from, to, promotion).ok_or_else(|| {
                    let suffix = promotion
                        .map(|kind| kind.letter().to_ascii_lowercase().to_string())
                        .unwrap_or_default();
                    ChessEngineError::IllegalMove {
                        mv: format!("{from}{to}{suffix}"),
                    }
                })?;
                self.game.apply_move(mv)?;
                let san = self
                    .game
                    .last_move()
                    .map(|played| played.san.clone())
                    .unwrap_or_else(|| mv.to_string());
                Ok(Reply::Moved(san))
            }
            Command::Undo => self.undo().map(Reply::Undone),
            Command::Reset => {
                self.ai.cancel();
                self.game.reset();
                Ok(Reply::Reset)
            }
            Command::Moves => Ok(Reply::Moves(self.game.legal_moves())),
            Command::Fen => Ok(Reply::Fen(self.game.position().to_fen())),
            Command::History => Ok(Reply::History(
                self.game.notation().into_iter().map(str::to_owned).collect(),
            )),
            Command::Help => Ok(Reply::Help),
            Command::Quit => {
                self.ai.cancel();
                Ok(Reply::Quit)
            }
        }
    }

    /// Let the AI make progress; returns the AI move played this tick
    ///
    /// # Errors
    ///
    /// Scheduler failures from the AI controller.
    pub fn tick(&mut self) -> GameResult<Option<AIMove>> {
        self.ai.tick(&mut self.game, &self.config)
    }

    /// Block until the pending AI search (if any) lands
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::tick`].
    pub fn wait_for_ai(&mut self) -> GameResult<Option<AIMove>> {
        self.ai.wait(&mut self.game)
    }

    /// Take back moves until a human is to move again
    ///
    /// Against the AI that means the AI's reply and the human's move, so the
    /// human can try something else. Never pops more than two plies.
    fn undo(&mut self) -> GameResult<usize> {
        self.ai.cancel();
        self.game.undo_move()?;
        let mut undone = 1;

        if let GameMode::VsAI { ai_color } = self.config.mode {
            if self.game.side_to_move() == ai_color && !self.game.history().is_empty() {
                self.game.undo_move()?;
                undone += 1;
            }
        }

        info!(plies = undone, "[GAME] Undo");
        Ok(undone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::{Color, GameStatus};

    fn two_player() -> GameSession {
        GameSession::new(
            Game::new(),
            ChessAIResource {
                mode: GameMode::VsHuman,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_human_moves_and_history() {
        let mut session = two_player();
        assert_eq!(session.handle_line("e2e4").unwrap(), Reply::Moved("e4".into()));
        assert_eq!(session.handle_line("g8f6").unwrap(), Reply::Moved("Nf6".into()));
        assert_eq!(
            session.handle_line("history").unwrap(),
            Reply::History(vec!["e4".into(), "Nf6".into()])
        );
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut session = two_player();
        let err = session.handle_line("e2e5").unwrap_err();
        assert!(matches!(
            err,
            GameError::Engine(ChessEngineError::IllegalMove { .. })
        ));
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_move_refused_on_ai_turn() {
        let mut session = GameSession::new(
            Game::new(),
            ChessAIResource {
                mode: GameMode::VsAI {
                    ai_color: Color::White,
                },
                ..Default::default()
            },
        );
        assert_eq!(
            session.handle_line("e2e4"),
            Err(GameError::NotYourTurn { side: Color::White })
        );
    }

    #[test]
    fn test_fen_and_reset_commands() {
        let mut session = two_player();
        session.handle_line("e2e4").unwrap();
        assert_eq!(
            session.handle_line("fen").unwrap(),
            Reply::Fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".into())
        );
        assert_eq!(session.handle_line("reset").unwrap(), Reply::Reset);
        assert!(session.game().history().is_empty());
        assert_eq!(session.game().current_state(), GameStatus::InProgress);
    }

    #[test]
    fn test_two_player_undo_takes_one_ply() {
        let mut session = two_player();
        session.handle_line("e2e4").unwrap();
        session.handle_line("e7e5").unwrap();
        assert_eq!(session.handle_line("undo").unwrap(), Reply::Undone(1));
        assert_eq!(session.game().history().len(), 1);
    }
}
