//! # Chess Engine Constants - Material Values, Offsets & Rule Limits
//!
//! ## Material
//!
//! Evaluation is a pure material count in whole pawns:
//!
//! - **Pawn**: 1
//! - **Knight**: 3
//! - **Bishop**: 3
//! - **Rook**: 5
//! - **Queen**: 9
//! - **King**: not counted. Losing the king is expressed structurally by the
//!   search (checkmate score), never as material.
//!
//! ## Mate Scores
//!
//! `MATE_SCORE` is far above any reachable material total (the maximum is
//! 103 for one side: 9 queens, 2 rooks, 2 bishops, 2 knights). A mate found
//! with `d` plies of search depth still remaining scores `MATE_SCORE + d`, so
//! a shorter mate always outranks a longer one.
//!
//! ## Direction Offsets
//!
//! Offsets are `(file_delta, rank_delta)` pairs applied with bounds checks via
//! [`crate::types::Square::offset`]. Working in file/rank space instead of
//! raw 0-63 deltas makes board-edge wrapping impossible.

/// Material value of a pawn
pub const PAWN_VALUE: i32 = 1;
/// Material value of a knight
pub const KNIGHT_VALUE: i32 = 3;
/// Material value of a bishop
pub const BISHOP_VALUE: i32 = 3;
/// Material value of a rook
pub const ROOK_VALUE: i32 = 5;
/// Material value of a queen
pub const QUEEN_VALUE: i32 = 9;

/// Base score for a forced checkmate
pub const MATE_SCORE: i32 = 100_000;

/// Any score beyond this magnitude is a mate score
pub const MATE_THRESHOLD: i32 = MATE_SCORE / 2;

/// Halfmoves without capture or pawn move that draw the game (50 full moves)
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Occurrences of the same position that draw the game
pub const REPETITION_LIMIT: usize = 3;

/// Standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Rook directions: north, east, south, west
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop directions: north-east, south-east, south-west, north-west
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
