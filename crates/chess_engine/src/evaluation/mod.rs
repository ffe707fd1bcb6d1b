//! Position evaluation
//!
//! Evaluation is a pure material count: positive favors White, negative
//! favors Black, independent of the side to move. There are no positional,
//! mobility or king-safety terms; that is the ceiling of this evaluator, and
//! everything else the engine knows comes from search.
//!
//! ## Module Organization
//!
//! - `material` - Piece values and the material balance

mod material;

pub use material::{evaluate_material, piece_value};

use crate::position::Position;

/// Static score of a position in whole pawns, from White's point of view
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(evaluate(&Position::starting()), 0);
/// ```
#[inline]
pub fn evaluate(position: &Position) -> i32 {
    evaluate_material(&position.board)
}
