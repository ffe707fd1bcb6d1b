//! AI resource definitions for game mode and difficulty settings
//!
//! Configures AI opponent behavior, strength, and game mode selection.
//! These settings control when the AI activates and how deep it searches.
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players (local hot-seat)
//! - **VsAI**: One human player vs AI opponent (specify AI color)
//! - **AiVsAi**: The engine plays both sides
//!
//! # Difficulty Levels
//!
//! The engine searches to a fixed depth, so difficulty maps straight to
//! plies:
//!
//! | Difficulty | Depth | Typical think time |
//! |------------|-------|--------------------|
//! | Easy       | 2     | instant            |
//! | Medium     | 3     | well under 1s      |
//! | Hard       | 4     | a few seconds      |
//!
//! An explicit depth override (`--depth`) wins over the difficulty.
//!
//! # Integration
//!
//! ```rust,ignore
//! let config = ChessAIResource {
//!     mode: GameMode::VsAI { ai_color: Color::Black },
//!     difficulty: AIDifficulty::Medium,
//!     depth_override: None,
//! };
//! ```
//!
//! The [`crate::game::ai::systems`] module checks this configuration to
//! decide when to dispatch a search.

use chess_engine::Color;

/// Main configuration for the chess AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessAIResource {
    /// Current game mode
    ///
    /// When `VsHuman`, AI systems early-return without computation.
    pub mode: GameMode,

    /// AI difficulty setting
    pub difficulty: AIDifficulty,

    /// Search depth that replaces the difficulty's depth when set
    pub depth_override: Option<u8>,
}

impl Default for ChessAIResource {
    /// AI plays Black at medium difficulty
    fn default() -> Self {
        Self {
            mode: GameMode::VsAI {
                ai_color: Color::Black,
            },
            difficulty: AIDifficulty::Medium,
            depth_override: None,
        }
    }
}

impl ChessAIResource {
    /// Depth handed to the engine
    pub fn search_depth(&self) -> u8 {
        self.depth_override.unwrap_or_else(|| self.difficulty.depth())
    }
}

/// Game mode selection
///
/// Determines which sides the AI plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans, no AI
    VsHuman,

    /// Human vs AI opponent
    ///
    /// The specified color is controlled by the AI engine.
    /// The other color is controlled by human input.
    VsAI {
        /// The color the AI will play
        ai_color: Color,
    },

    /// AI plays both colors
    AiVsAi,
}

impl GameMode {
    /// Get the AI player's color when exactly one side is AI-controlled
    pub fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::VsAI { ai_color } => Some(ai_color),
            _ => None,
        }
    }

    /// Whether the AI moves for `side`
    pub fn is_ai_turn(self, side: Color) -> bool {
        match self {
            GameMode::VsHuman => false,
            GameMode::VsAI { ai_color } => ai_color == side,
            GameMode::AiVsAi => true,
        }
    }
}

/// AI difficulty levels corresponding to search depth
///
/// # Examples
///
/// ```rust,ignore
/// let difficulty = AIDifficulty::Medium;
/// println!("AI searches {} plies ({})", difficulty.depth(), difficulty.description());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AIDifficulty {
    /// Depth 2: sees direct captures and replies
    Easy,

    /// Depth 3: default
    #[default]
    Medium,

    /// Depth 4: noticeably slower in busy middlegames
    Hard,
}

impl AIDifficulty {
    /// Search depth in plies
    pub fn depth(self) -> u8 {
        match self {
            AIDifficulty::Easy => 2,
            AIDifficulty::Medium => 3,
            AIDifficulty::Hard => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy (2 ply)",
            AIDifficulty::Medium => "Medium (3 ply)",
            AIDifficulty::Hard => "Hard (4 ply)",
        }
    }
}
