//! Public route group, served without authentication.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::http::server::AppState;

/// Liveness and version payload.
#[derive(Serialize, ToSchema)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    /// Seconds since the server process started.
    pub uptime_secs: u64,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/status", get(status))
        .with_state(state)
}

/// Server liveness and version information.
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = "public",
    responses((status = 200, description = "Server is up", body = SystemStatus))
)]
pub async fn status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
