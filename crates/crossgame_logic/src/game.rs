//! Game session: two players, one board, alternating turns.

use crate::board::Board;
use crate::error::{GameError, GameErrorKind};
use crate::player::Player;
use crate::snapshot::{GameStateSnapshot, SessionId, WinnerInfo};
use crate::types::{GameStatus, Sign};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// A running tic-tac-toe game.
///
/// The X player moves first. Every accepted move hands the turn to the other
/// player, including the move that ends the game; once the status is
/// terminal every further move is rejected with [`GameErrorKind::GameOver`].
#[derive(Debug, Clone)]
pub struct GameSession {
    session_id: SessionId,
    players: [Player; 2],
    board: Board,
    status: GameStatus,
}

impl GameSession {
    /// Creates a game on the classic 3x3 board.
    ///
    /// # Errors
    ///
    /// See [`GameSession::with_dimension`].
    pub fn new(session_id: impl Into<SessionId>, players: Vec<Player>) -> Result<Self, GameError> {
        Self::with_dimension(session_id, players, Board::CLASSIC)
    }

    /// Creates a game on an N×N board.
    ///
    /// The X player is made active and the O player inactive, whatever flags
    /// the players arrived with.
    ///
    /// # Errors
    ///
    /// - [`GameErrorKind::InvalidSessionId`] if the id is empty.
    /// - [`GameErrorKind::InvalidPlayerCount`] unless exactly two players are given.
    /// - [`GameErrorKind::InvalidSigns`] unless the players hold one X and one O.
    /// - [`GameErrorKind::InvalidDimensions`] for an invalid board size.
    #[instrument(skip(session_id, players), fields(players = players.len()))]
    pub fn with_dimension(
        session_id: impl Into<SessionId>,
        players: Vec<Player>,
        dimension: usize,
    ) -> Result<Self, GameError> {
        let session_id = session_id.into();
        if session_id.is_empty() {
            warn!("Empty session id");
            return Err(GameError::new(GameErrorKind::InvalidSessionId));
        }

        let mut players: [Player; 2] = players.try_into().map_err(|players: Vec<Player>| {
            warn!(count = players.len(), "Wrong number of players");
            GameError::new(GameErrorKind::InvalidPlayerCount(players.len()))
        })?;

        if !Sign::iter().all(|sign| players.iter().any(|p| *p.sign() == sign)) {
            warn!("Players do not hold one X and one O");
            return Err(GameError::new(GameErrorKind::InvalidSigns));
        }

        for player in &mut players {
            let first = *player.sign() == Sign::X;
            player.set_active(first);
        }

        let board = Board::new(dimension, dimension)?;
        info!(session_id = %session_id, dimension, "Created game session");

        Ok(Self {
            session_id,
            players,
            board,
            status: GameStatus::InProgress,
        })
    }

    /// Returns the session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns both players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the status computed after the last accepted move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Looks a player up by id.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::NoActivePlayer`] if no player is active.
    pub fn active_player(&self) -> Result<&Player, GameError> {
        self.players.iter().find(|p| *p.is_active()).ok_or_else(|| {
            warn!(session_id = %self.session_id, "No active player");
            GameError::new(GameErrorKind::NoActivePlayer(self.session_id.clone()))
        })
    }

    fn player_index(&self, player_id: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| {
                warn!(player_id, "Unknown player attempted move");
                GameError::new(GameErrorKind::PlayerNotFound(player_id.to_string()))
            })
    }

    /// Puts the player's sign at `row`, `col` and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`GameErrorKind::PlayerNotFound`] if the id is not one of the two players.
    /// - [`GameErrorKind::GameOver`] once the game ended.
    /// - [`GameErrorKind::MoveNotAllowed`] if it is not the player's turn.
    /// - [`GameErrorKind::OutOfRange`] / [`GameErrorKind::CellOccupied`] from
    ///   the board; the turn does not change.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn make_move(
        &mut self,
        player_id: &str,
        row: usize,
        col: usize,
    ) -> Result<GameStateSnapshot, GameError> {
        let mover = self.player_index(player_id)?;

        if self.status.is_terminal() {
            warn!(player_id, status = ?self.status, "Move after game over");
            return Err(GameError::new(GameErrorKind::GameOver));
        }

        if !*self.players[mover].is_active() {
            warn!(player_id, "Player tried to move out of turn");
            return Err(GameError::new(GameErrorKind::MoveNotAllowed(
                player_id.to_string(),
            )));
        }

        let sign = *self.players[mover].sign();
        self.board.place(row, col, sign)?;

        self.players[mover].set_active(false);
        self.players[1 - mover].set_active(true);
        self.status = self.board.evaluate();

        info!(player_id, row, col, %sign, status = ?self.status, "Move completed");
        self.snapshot()
    }

    /// Computes the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::NoActivePlayer`] if no player is active.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn snapshot(&self) -> Result<GameStateSnapshot, GameError> {
        let active = self.active_player()?.clone();

        let winner = match self.board.evaluate() {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(WinnerInfo::draw()),
            GameStatus::Finished(sign) => {
                let player = self
                    .players
                    .iter()
                    .find(|p| *p.sign() == sign)
                    .cloned()
                    .ok_or_else(|| GameError::new(GameErrorKind::SignNotHeld(sign)))?;
                Some(WinnerInfo::winner(player))
            }
        };
        debug!(active = %active.name(), finished = winner.is_some(), "Built snapshot");

        Ok(GameStateSnapshot::in_game(
            self.session_id.clone(),
            &self.players,
            active,
            self.board.snapshot(),
            winner,
        ))
    }
}
