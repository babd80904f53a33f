//! Board engine: an odd N×N grid of cells.

use crate::error::{GameError, GameErrorKind};
use crate::rules;
use crate::types::{Cell, GameStatus, Sign};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Square tic-tac-toe board with an odd side length of at least 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Side length.
    dimension: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Side length of the classic board.
    pub const CLASSIC: usize = 3;

    /// Largest accepted side length.
    pub const MAX_DIMENSION: usize = 101;

    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidDimensions`] unless the sizes pass
    /// [`Board::check_dimensions`].
    #[instrument]
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let len = Self::check_dimensions(width, height)?;

        let board = Self {
            dimension: width,
            cells: vec![Cell::Empty; len],
        };
        info!(dimension = width, "Game field was generated");
        Ok(board)
    }

    /// Creates an empty 3x3 board.
    pub fn classic() -> Self {
        Self {
            dimension: Self::CLASSIC,
            cells: vec![Cell::Empty; Self::CLASSIC * Self::CLASSIC],
        }
    }

    /// Builds a board from explicit rows, e.g. a saved position or a fixture.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidDimensions`] if the rows do not form a
    /// valid board.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            warn!(width, height, "Ragged rows");
            return Err(GameError::new(GameErrorKind::InvalidDimensions { width, height }));
        }
        Self::check_dimensions(width, height)?;

        Ok(Self {
            dimension: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Checks a requested size without allocating a board and returns the
    /// number of cells.
    ///
    /// The board must be square with an odd side between 3 and
    /// [`Board::MAX_DIMENSION`]. Even sides are rejected so that the board
    /// has a single pair of main diagonals.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidDimensions`] for any other size.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize, GameError> {
        let valid = width == height
            && (3..=Self::MAX_DIMENSION).contains(&width)
            && width % 2 == 1;
        match width.checked_mul(height) {
            Some(len) if valid => Ok(len),
            _ => {
                warn!(width, height, "Rejected field size");
                Err(GameError::new(GameErrorKind::InvalidDimensions { width, height }))
            }
        }
    }

    /// Returns the side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }

    #[track_caller]
    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GameError::new(GameErrorKind::OutOfRange {
                row,
                col,
                dimension: self.dimension,
            }));
        }
        Ok(row * self.dimension + col)
    }

    /// Returns the cell at the coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfRange`] for coordinates off the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Returns the cell at in-range coordinates, treating anything else as empty.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.dimension || col >= self.dimension {
            return Cell::Empty;
        }
        self.cells
            .get(row * self.dimension + col)
            .copied()
            .unwrap_or_default()
    }

    /// Checks if the cell holds no sign.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::OutOfRange`] for coordinates off the board.
    #[instrument(skip(self))]
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        let empty = self.get(row, col)?.is_empty();
        debug!(row, col, empty, "Checked cell");
        Ok(empty)
    }

    /// Puts a sign into an empty cell.
    ///
    /// # Errors
    ///
    /// - [`GameErrorKind::OutOfRange`] if the coordinates are off the board.
    /// - [`GameErrorKind::CellOccupied`] if the cell already holds a sign; the
    ///   board is left untouched.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn place(&mut self, row: usize, col: usize, sign: Sign) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            warn!(row, col, "Cell already has a value");
            return Err(GameError::new(GameErrorKind::CellOccupied { row, col }));
        }

        debug!(row, col, %sign, "Cell will be set");
        self.cells[idx] = Cell::Occupied(sign);
        Ok(())
    }

    /// Checks if every cell holds a sign.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board.
    ///
    /// Lines are scanned rows top to bottom, then the main diagonal, then the
    /// anti-diagonal, then columns left to right; the first complete line
    /// decides the winner.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn evaluate(&self) -> GameStatus {
        let status = match rules::check_winner(self) {
            Some(sign) => GameStatus::Finished(sign),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        debug!(?status, field = %self.render_tabbed(), "Evaluated field");
        status
    }

    /// Returns a row-major copy of the grid.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Tab separated rendering used in debug logs.
    fn render_tabbed(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            for cell in row {
                out.push_str(&format!("{}\t", cell));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.dimension].join("+");
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
