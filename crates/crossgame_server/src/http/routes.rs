//! Request handlers.

use super::AppState;
use super::error::ApiError;
use crate::store::SessionStore;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use crossgame_logic::GameStateSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument};

/// Request for creating a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRequest {
    /// Name of the first player.
    pub player_name: String,
}

/// Request for joining a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinGameRequest {
    /// Name of the second player.
    pub player_name: String,
    /// Session to join.
    pub session_id: String,
}

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    /// Session ID.
    pub session_id: String,
    /// Player ID handed out on creation or joining.
    pub player_id: String,
    /// Row, starting from 0.
    pub row: usize,
    /// Column, starting from 0.
    pub column: usize,
}

/// Response of the status route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the game has started.
    pub started: bool,
    /// Current state, absent while waiting for players.
    pub state: Option<GameStateSnapshot>,
}

pub(super) async fn health(State(state): State<AppState>) -> Json<Value> {
    let sessions = state.controller().lock().await.store().len();
    Json(json!({ "status": "ok", "sessions": sessions }))
}

#[instrument(skip(state))]
pub(super) async fn new_game(
    State(state): State<AppState>,
    Json(req): Json<NewGameRequest>,
) -> Result<Json<GameStateSnapshot>, ApiError> {
    let snapshot = state
        .controller()
        .lock()
        .await
        .start_session(&req.player_name)?;
    Ok(Json(snapshot))
}

/// Joins the session and starts the game right away.
#[instrument(skip(state))]
pub(super) async fn join_game(
    State(state): State<AppState>,
    Json(req): Json<JoinGameRequest>,
) -> Result<Json<GameStateSnapshot>, ApiError> {
    let mut controller = state.controller().lock().await;
    let joined = controller.join_session(&req.player_name, &req.session_id)?;
    let started = controller.start_game(&req.session_id)?;
    info!(session_id = %req.session_id, "Joined and started");

    let snapshot = match joined.registered_player().clone() {
        Some(player) => started.with_registered_player(player),
        None => started,
    };
    Ok(Json(snapshot))
}

#[instrument(skip(state))]
pub(super) async fn start_game(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GameStateSnapshot>, ApiError> {
    let snapshot = state.controller().lock().await.start_game(&session_id)?;
    Ok(Json(snapshot))
}

#[instrument(skip(state))]
pub(super) async fn make_move(
    State(state): State<AppState>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<GameStateSnapshot>, ApiError> {
    let snapshot = state.controller().lock().await.make_move(
        &req.session_id,
        &req.player_id,
        req.row,
        req.column,
    )?;
    Ok(Json(snapshot))
}

#[instrument(skip(state))]
pub(super) async fn status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let snapshot = state.controller().lock().await.get_status(&session_id)?;
    Ok(Json(StatusResponse {
        started: snapshot.is_some(),
        state: snapshot,
    }))
}

#[instrument(skip(state))]
pub(super) async fn close_game(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    state.controller().lock().await.close_session(&session_id);
    StatusCode::NO_CONTENT
}
