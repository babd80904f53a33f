//! Draw detection logic.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
