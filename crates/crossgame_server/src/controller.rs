//! Session controller: the lifecycle operations front-ends call.

use crate::store::{InMemorySessionStore, SessionRecord, SessionStore};
use crossgame_logic::{Board, GameError, GameStateSnapshot, Player, PlayerId, SessionId, Sign};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Sequences two players through creating, joining, starting and playing a
/// session.
///
/// Operations change the stored record in place and return a fresh
/// snapshot. Every check runs before the record is touched, so a rejected
/// call leaves it as it was. The controller owns its store; to share it
/// between threads wrap the controller in a mutex.
#[derive(Debug)]
pub struct Controller<S = InMemorySessionStore> {
    store: S,
    board_size: usize,
}

impl<S: SessionStore> Controller<S> {
    /// Creates a controller over `store` playing on the classic board.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        info!("Creating controller");
        Self {
            store,
            board_size: Board::CLASSIC,
        }
    }

    /// Sets the board size used by [`Controller::start_game`].
    ///
    /// The size is validated when a game starts.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the configured board size.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Creates a session with `player_name` as the first player (X, moves first).
    ///
    /// The returned snapshot has no board; `registered_player` carries the new
    /// player's id.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, player_name: &str) -> Result<GameStateSnapshot, GameError> {
        let session_id: SessionId = Self::generate_id();
        let player_id: PlayerId = Self::generate_id();
        let player = Player::new(player_id, player_name.to_string(), Sign::X, true);

        let record = SessionRecord::new(session_id.clone(), player.clone());
        let snapshot = record.pending_snapshot()?.with_registered_player(player);
        self.store.save(session_id.clone(), record);

        info!(session_id = %session_id, "Created game session");
        Ok(snapshot)
    }

    /// Joins `player_name` to an existing session as the second player (O).
    ///
    /// `active_player` in the returned snapshot is still the creator, who
    /// moves first; the joiner is reported in `registered_player`.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for an unknown id, `SessionFull` if two players
    /// already joined.
    #[instrument(skip(self))]
    pub fn join_session(
        &mut self,
        player_name: &str,
        session_id: &str,
    ) -> Result<GameStateSnapshot, GameError> {
        let record = self.store.get_mut(session_id)?;
        let player = Player::new(Self::generate_id(), player_name.to_string(), Sign::O, false);

        record.add_player(player.clone())?;
        let snapshot = record.pending_snapshot()?.with_registered_player(player);

        info!(session_id, "Joined game session");
        Ok(snapshot)
    }

    /// Starts the game of a session; starting again begins a fresh game.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for an unknown id, `InvalidPlayerCount` while only
    /// one player joined, `InvalidDimensions` for a bad configured size.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, session_id: &str) -> Result<GameStateSnapshot, GameError> {
        let record = self.store.get_mut(session_id)?;
        let snapshot = record.start(self.board_size)?.snapshot()?;

        info!(session_id, board_size = self.board_size, "Game started");
        Ok(snapshot)
    }

    /// Makes a move on behalf of `player_id`.
    ///
    /// # Errors
    ///
    /// `SessionNotFound`, `GameNotStarted`, then whatever the game rejects
    /// the move with (`PlayerNotFound`, `GameOver`, `MoveNotAllowed`,
    /// `OutOfRange`, `CellOccupied`).
    #[instrument(skip(self))]
    pub fn make_move(
        &mut self,
        session_id: &str,
        player_id: &str,
        row: usize,
        col: usize,
    ) -> Result<GameStateSnapshot, GameError> {
        let record = self.store.get_mut(session_id)?;
        let snapshot = record.game_mut()?.make_move(player_id, row, col)?;

        debug!(session_id, finished = snapshot.is_finished(), "Move stored");
        Ok(snapshot)
    }

    /// Returns the current snapshot, or `None` while the game is not started.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for an unknown id.
    #[instrument(skip(self))]
    pub fn get_status(&self, session_id: &str) -> Result<Option<GameStateSnapshot>, GameError> {
        let record = self.store.get(session_id)?;
        match record.game() {
            Some(game) if *record.started() => game.snapshot().map(Some),
            _ => {
                debug!(session_id, "Game not started yet");
                Ok(None)
            }
        }
    }

    /// Removes a session; unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn close_session(&mut self, session_id: &str) {
        self.store.remove(session_id);
    }
}
