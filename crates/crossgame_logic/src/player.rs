//! Players taking part in a session.

use crate::types::Sign;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player.
pub type PlayerId = String;

/// A player in a game session.
///
/// Snapshots carry clones of players, never handles to the live ones; the
/// active flag only changes inside [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Player's unique ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Which sign this player puts on the board.
    sign: Sign,
    /// Whether it is this player's turn.
    is_active: bool,
}

impl Player {
    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
