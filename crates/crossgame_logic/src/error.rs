//! Error types for the board engine and game sessions.

use crate::types::Sign;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in a game operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Board is not square, has an even side, or is outside 3x3..=101x101.
    #[display("Field must be square and odd, from 3x3 to 101x101 (got {width}x{height})")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Coordinates fall outside the board.
    #[display("Cell {row}:{col} is outside the {dimension}x{dimension} field")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        dimension: usize,
    },

    /// The cell already holds a sign.
    #[display("Cell {row}:{col} already has a value")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// Session id is empty.
    #[display("Incorrect session id passed")]
    InvalidSessionId,

    /// A game needs exactly two players.
    #[display("Number of players should be 2 (got {_0})")]
    InvalidPlayerCount(usize),

    /// The two players do not hold one X and one O.
    #[display("Players must hold one X and one O")]
    InvalidSigns,

    /// No session is stored under the id.
    #[display("Session {_0} is not found")]
    SessionNotFound(String),

    /// The session already has two players.
    #[display("Session {_0} already has 2 players")]
    SessionFull(String),

    /// The session exists but its game was never started.
    #[display("Game in session {_0} has not been started")]
    GameNotStarted(String),

    /// No player matches the id.
    #[display("Player {_0} is not found")]
    PlayerNotFound(String),

    /// The player is not the one whose turn it is.
    #[display("Player {_0} can't make a move now")]
    MoveNotAllowed(String),

    /// The game already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// No player holds the turn.
    #[display("No player is active in session {_0}")]
    NoActivePlayer(String),

    /// A winning sign is held by neither player.
    #[display("No player holds sign {_0}")]
    SignNotHeld(Sign),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    kind: GameErrorKind,
    /// Line number where error occurred.
    line: u32,
    /// Source file where error occurred.
    file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// Source location where the error was raised.
    pub fn location(&self) -> (&'static str, u32) {
        (self.file, self.line)
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
