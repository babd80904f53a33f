//! JSON HTTP adapter over a shared controller.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{JoinGameRequest, MakeMoveRequest, NewGameRequest, StatusResponse};

use crate::config::CrossgameConfig;
use crate::controller::Controller;
use anyhow::Result;
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// State shared by all handlers.
///
/// One lock around the controller serializes every read, change and save of
/// a session record.
#[derive(Debug, Clone)]
pub struct AppState {
    controller: Arc<Mutex<Controller>>,
}

impl AppState {
    /// Wraps a controller for sharing between requests.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    pub(crate) fn controller(&self) -> &Mutex<Controller> {
        &self.controller
    }
}

/// Builds the router with all game routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/game/new", post(routes::new_game))
        .route("/game/join", post(routes::join_game))
        .route("/game/move", post(routes::make_move))
        .route("/game/status/{session_id}", get(routes::status))
        .route("/game/{session_id}/start", post(routes::start_game))
        .route("/game/{session_id}", delete(routes::close_game))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "Incoming HTTP request");

    let response = next.run(req).await;
    info!(status = %response.status(), %uri, "Response sent");
    response
}

/// Serves the HTTP adapter until the process is stopped.
#[instrument(skip_all, fields(host = %config.http().host(), port = *config.http().port()))]
pub async fn serve(config: &CrossgameConfig, controller: Controller) -> Result<()> {
    let app = build_router(AppState::new(controller));

    let addr = (config.http().host().as_str(), *config.http().port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Server ready at http://{}:{}/",
        config.http().host(),
        config.http().port()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
