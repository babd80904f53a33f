//! Mapping of game errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crossgame_logic::{GameError, GameErrorKind};
use serde_json::json;
use tracing::warn;

/// Error returned by HTTP handlers.
///
/// Renders as `{ "error": <message>, "code": <KIND> }`.
#[derive(Debug, derive_more::From)]
pub struct ApiError(GameError);

impl ApiError {
    /// HTTP status for the error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            GameErrorKind::SessionNotFound(_) | GameErrorKind::PlayerNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            GameErrorKind::CellOccupied { .. }
            | GameErrorKind::MoveNotAllowed(_)
            | GameErrorKind::GameOver
            | GameErrorKind::SessionFull(_)
            | GameErrorKind::GameNotStarted(_) => StatusCode::CONFLICT,
            GameErrorKind::InvalidDimensions { .. }
            | GameErrorKind::OutOfRange { .. }
            | GameErrorKind::InvalidSessionId
            | GameErrorKind::InvalidPlayerCount(_)
            | GameErrorKind::InvalidSigns => StatusCode::BAD_REQUEST,
            GameErrorKind::NoActivePlayer(_) | GameErrorKind::SignNotHeld(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self.0.kind() {
            GameErrorKind::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            GameErrorKind::OutOfRange { .. } => "OUT_OF_RANGE",
            GameErrorKind::CellOccupied { .. } => "CELL_OCCUPIED",
            GameErrorKind::InvalidSessionId => "INVALID_SESSION_ID",
            GameErrorKind::InvalidPlayerCount(_) => "INVALID_PLAYER_COUNT",
            GameErrorKind::InvalidSigns => "INVALID_SIGNS",
            GameErrorKind::SessionNotFound(_) => "SESSION_NOT_FOUND",
            GameErrorKind::SessionFull(_) => "SESSION_FULL",
            GameErrorKind::GameNotStarted(_) => "GAME_NOT_STARTED",
            GameErrorKind::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            GameErrorKind::MoveNotAllowed(_) => "MOVE_NOT_ALLOWED",
            GameErrorKind::GameOver => "GAME_OVER",
            GameErrorKind::NoActivePlayer(_) => "NO_ACTIVE_PLAYER",
            GameErrorKind::SignNotHeld(_) => "SIGN_NOT_HELD",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self.0, "Request failed");

        let body = json!({
            "error": self.0.kind().to_string(),
            "code": self.code(),
        });
        (status, Json(body)).into_response()
    }
}
