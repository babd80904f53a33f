//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Sign a player puts on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Sign {
    /// Sign X (goes first).
    X,
    /// Sign O (goes second).
    O,
}

impl Sign {
    /// Returns the opposing sign.
    pub fn opponent(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }
}

/// A cell on the board.
///
/// Serialized as `null` when empty and as the sign otherwise, so front-ends
/// receive a plain `[[ "X", null, ... ]]` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Sign>", into = "Option<Sign>")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a sign.
    Occupied(Sign),
}

impl Cell {
    /// Returns the sign in this cell, if any.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(sign) => Some(sign),
        }
    }

    /// Checks if the cell holds no sign.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Sign>> for Cell {
    fn from(sign: Option<Sign>) -> Self {
        sign.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Sign> {
    fn from(cell: Cell) -> Self {
        cell.sign()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(sign) => write!(f, "{}", sign),
        }
    }
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one cell is empty and no line is complete.
    InProgress,
    /// A line is complete for the sign.
    Finished(Sign),
    /// Every cell is filled and no line is complete.
    Draw,
}

impl GameStatus {
    /// Returns true once the game ended in a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning sign if there is one.
    pub fn winner(&self) -> Option<Sign> {
        match self {
            GameStatus::Finished(sign) => Some(*sign),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
