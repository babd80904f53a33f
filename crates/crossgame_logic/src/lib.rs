//! Crossgame logic - board engine and game session for tic-tac-toe.
//!
//! This crate holds the parts of the game with real rules in them:
//!
//! - **Board**: an odd N×N grid that validates moves and detects wins/draws
//! - **GameSession**: two players, one board, turn alternation
//! - **Snapshots**: immutable views handed back to front-ends
//!
//! Session bookkeeping and front-ends live in `crossgame_server`.
//!
//! # Example
//!
//! ```
//! use crossgame_logic::{GameSession, Player, Sign};
//!
//! # fn example() -> Result<(), crossgame_logic::GameError> {
//! let players = vec![
//!     Player::new("p1".to_string(), "Alice".to_string(), Sign::X, true),
//!     Player::new("p2".to_string(), "Bob".to_string(), Sign::O, false),
//! ];
//! let mut game = GameSession::new("session-1", players)?;
//! let snapshot = game.make_move("p1", 1, 1)?;
//! assert_eq!(snapshot.active_player().name(), "Bob");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod player;
pub mod rules;
mod snapshot;
mod types;

// Crate-level exports - Board engine
pub use board::Board;

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Game session
pub use game::GameSession;

// Crate-level exports - Players and snapshots
pub use player::{Player, PlayerId};
pub use snapshot::{GameStateSnapshot, SessionId, WinnerInfo};

// Crate-level exports - Domain types
pub use types::{Cell, GameStatus, Sign};
