//! Stored state of one session.

use crossgame_logic::{
    GameError, GameErrorKind, GameSession, GameStateSnapshot, Player, SessionId,
};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Everything known about one session: who joined and, once started, the game.
#[derive(Debug, Clone, Getters)]
pub struct SessionRecord {
    /// Session id.
    session_id: SessionId,
    /// Players in join order until the game starts; the game owns them after.
    #[getter(skip)]
    players: Vec<Player>,
    /// The game, present once started.
    game: Option<GameSession>,
    /// Whether the game has been started.
    started: bool,
}

impl SessionRecord {
    /// Maximum number of players in a session.
    pub const MAX_PLAYERS: usize = 2;

    /// Creates a record holding only the session creator.
    #[instrument(skip(creator), fields(creator = %creator.name()))]
    pub fn new(session_id: SessionId, creator: Player) -> Self {
        Self {
            session_id,
            players: vec![creator],
            game: None,
            started: false,
        }
    }

    /// Players in join order.
    ///
    /// Once a game exists these are the game's players, so the active flags
    /// follow the moves.
    pub fn players(&self) -> &[Player] {
        match &self.game {
            Some(game) => game.players(),
            None => &self.players,
        }
    }

    /// Adds a player to the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionFull` if two players already joined.
    #[instrument(skip(self, player), fields(session_id = %self.session_id))]
    pub fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        if self.players().len() >= Self::MAX_PLAYERS {
            warn!(player_id = %player.id(), "Session already has 2 players");
            return Err(GameError::new(GameErrorKind::SessionFull(
                self.session_id.clone(),
            )));
        }
        info!(player_id = %player.id(), sign = %player.sign(), "Player joined");
        self.players.push(player);
        Ok(())
    }

    /// Starts a fresh game with the joined players.
    ///
    /// # Errors
    ///
    /// Propagates [`GameSession::with_dimension`] errors, e.g.
    /// `InvalidPlayerCount` while the second player has not joined.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn start(&mut self, dimension: usize) -> Result<&GameSession, GameError> {
        let game =
            GameSession::with_dimension(self.session_id.clone(), self.players().to_vec(), dimension)?;
        if self.started {
            info!("Restarting game with the same players");
        }
        self.started = true;
        Ok(self.game.insert(game))
    }

    /// Returns the running game.
    ///
    /// # Errors
    ///
    /// Returns `GameNotStarted` before [`SessionRecord::start`].
    pub fn game_mut(&mut self) -> Result<&mut GameSession, GameError> {
        let session_id = &self.session_id;
        self.game
            .as_mut()
            .ok_or_else(|| GameError::new(GameErrorKind::GameNotStarted(session_id.clone())))
    }

    /// Snapshot of a session waiting for its game to start.
    ///
    /// # Errors
    ///
    /// Returns `NoActivePlayer` if no joined player holds the first turn.
    pub fn pending_snapshot(&self) -> Result<GameStateSnapshot, GameError> {
        let players = self.players();
        let first = players
            .iter()
            .find(|p| *p.is_active())
            .cloned()
            .ok_or_else(|| {
                GameError::new(GameErrorKind::NoActivePlayer(self.session_id.clone()))
            })?;
        Ok(GameStateSnapshot::pending(
            self.session_id.clone(),
            players,
            first,
        ))
    }
}
