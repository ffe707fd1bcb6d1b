//! Terminal user interface
//!
//! Plain-text rendering used by the `chess_masters` binary. Everything here
//! returns strings; printing is left to the caller.

pub mod board_view;

pub use board_view::{
    render_ai_move, render_board, render_move_list, render_moves, render_status, HELP_TEXT,
};
