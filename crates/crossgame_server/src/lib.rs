//! Crossgame server - session bookkeeping and front-ends for tic-tac-toe.
//!
//! # Architecture
//!
//! - **Store**: session id → [`SessionRecord`], behind the [`SessionStore`] trait
//! - **Controller**: create, join, start, move, query and close sessions
//! - **Console**: a line-oriented two-player loop over any reader/writer
//! - **HTTP**: a JSON adapter over a shared controller
//!
//! # Example
//!
//! ```
//! use crossgame_server::{Controller, InMemorySessionStore};
//!
//! # fn example() -> Result<(), crossgame_logic::GameError> {
//! let mut controller = Controller::new(InMemorySessionStore::new());
//! let created = controller.start_session("Alice")?;
//! let joined = controller.join_session("Bob", created.session_id())?;
//! let started = controller.start_game(joined.session_id())?;
//! assert!(started.is_started());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod controller;
mod http;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, CrossgameConfig, HttpConfig};

// Crate-level exports - Front-ends
pub use console::run_console;
pub use http::{
    ApiError, AppState, JoinGameRequest, MakeMoveRequest, NewGameRequest, StatusResponse,
    build_router, serve,
};

// Crate-level exports - Session management
pub use controller::Controller;
pub use store::{InMemorySessionStore, SessionRecord, SessionStore};
