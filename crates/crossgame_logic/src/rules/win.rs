//! Win detection logic.

use crate::{Board, Cell, Sign};
use tracing::instrument;

/// Coordinates of one line on the board.
pub type Line = Vec<(usize, usize)>;

/// All lines of a board in scan order.
///
/// Rows top to bottom, the main diagonal, the anti-diagonal, then columns
/// left to right. `2 * dimension + 2` lines in total.
#[instrument]
pub fn lines(dimension: usize) -> Vec<Line> {
    let rows = (0..dimension).map(|r| (0..dimension).map(|c| (r, c)).collect::<Line>());
    let main_diagonal: Line = (0..dimension).map(|i| (i, i)).collect();
    let anti_diagonal: Line = (0..dimension).map(|i| (i, dimension - i - 1)).collect();
    let columns = (0..dimension).map(|c| (0..dimension).map(|r| (r, c)).collect::<Line>());

    rows.chain([main_diagonal, anti_diagonal])
        .chain(columns)
        .collect()
}

/// Returns the sign owning a complete line.
///
/// A line is complete when every cell holds a sign equal to the first one.
pub fn line_winner<I>(cells: I) -> Option<Sign>
where
    I: IntoIterator<Item = Cell>,
{
    let mut cells = cells.into_iter();
    let first = cells.next()?.sign()?;
    cells
        .all(|cell| cell == Cell::Occupied(first))
        .then_some(first)
}

/// Checks if there is a winner on the board.
///
/// Returns the sign of the first complete line in scan order.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_winner(board: &Board) -> Option<Sign> {
    lines(board.dimension())
        .iter()
        .find_map(|line| line_winner(line.iter().map(|&(r, c)| board.cell(r, c))))
}
