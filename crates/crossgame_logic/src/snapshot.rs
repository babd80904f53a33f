//! Immutable game state views returned to front-ends.

use crate::player::Player;
use crate::types::{Cell, Sign};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Unique identifier for a game session.
pub type SessionId = String;

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WinnerInfo {
    /// Winning player, absent on a draw.
    player: Option<Player>,
    /// Winning sign, absent on a draw.
    sign: Option<Sign>,
    /// True when the board filled up with no complete line.
    is_draw: bool,
}

impl WinnerInfo {
    /// Outcome where `player` completed a line.
    pub fn winner(player: Player) -> Self {
        Self {
            sign: Some(*player.sign()),
            player: Some(player),
            is_draw: false,
        }
    }

    /// Outcome where nobody completed a line.
    pub fn draw() -> Self {
        Self {
            player: None,
            sign: None,
            is_draw: true,
        }
    }
}

impl std::fmt::Display for WinnerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.player, self.sign) {
            (Some(player), Some(sign)) => {
                write!(f, "Player {} wins with sign {}", player.name(), sign)
            }
            _ => write!(f, "Draw"),
        }
    }
}

/// Game state as seen by a front-end.
///
/// Recomputed on every query and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameStateSnapshot {
    /// Session the state belongs to.
    session_id: SessionId,
    /// Player names in join order.
    player_names: Vec<String>,
    /// Player whose turn it is.
    active_player: Player,
    /// Grid contents, present once the game has started.
    board: Option<Vec<Vec<Cell>>>,
    /// Outcome, present once the game reached a win or a draw.
    winner: Option<WinnerInfo>,
    /// Player created by the call that produced this snapshot.
    ///
    /// Only set on session creation and joining, so the caller can keep the
    /// new player's id.
    registered_player: Option<Player>,
}

impl GameStateSnapshot {
    /// Snapshot of a session whose game has not started yet.
    #[instrument(skip(players, active_player))]
    pub fn pending(session_id: SessionId, players: &[Player], active_player: Player) -> Self {
        Self {
            session_id,
            player_names: players.iter().map(|p| p.name().clone()).collect(),
            active_player,
            board: None,
            winner: None,
            registered_player: None,
        }
    }

    pub(crate) fn in_game(
        session_id: SessionId,
        players: &[Player],
        active_player: Player,
        board: Vec<Vec<Cell>>,
        winner: Option<WinnerInfo>,
    ) -> Self {
        Self {
            session_id,
            player_names: players.iter().map(|p| p.name().clone()).collect(),
            active_player,
            board: Some(board),
            winner,
            registered_player: None,
        }
    }

    /// Attaches the player created by the current call.
    pub fn with_registered_player(mut self, player: Player) -> Self {
        self.registered_player = Some(player);
        self
    }

    /// Returns true once the game has been started.
    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    /// Returns true once the game ended in a win or a draw.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}
