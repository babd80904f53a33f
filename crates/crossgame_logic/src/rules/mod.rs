//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so they work for any odd board size.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, line_winner, lines};
