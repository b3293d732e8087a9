//! Private route group, protected by a bearer API key.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::http::server::AppState;

/// Runtime configuration summary for operators.
#[derive(Serialize, ToSchema)]
pub struct ServerInfo {
    pub version: &'static str,
    pub host: String,
    pub port: u16,
    /// Whether a static file mount is active.
    pub static_files: bool,
    pub grace_period_secs: u64,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/server/info", get(server_info))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
}

/// Summary of the running server's configuration.
#[utoipa::path(
    get,
    path = "/api/v1/server/info",
    tag = "private",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Server info", body = ServerInfo),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn server_info(State(state): State<AppState>) -> Json<ServerInfo> {
    let config = &state.config;
    Json(ServerInfo {
        version: env!("CARGO_PKG_VERSION"),
        host: config.server.host.clone(),
        port: config.server.port,
        static_files: config.static_files.mount().is_some(),
        grace_period_secs: config.shutdown.grace_period_secs,
    })
}

/// Reject requests whose Authorization header does not carry the configured
/// bearer key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(auth_val) = auth_header {
        if auth_val == format!("Bearer {}", state.config.auth.api_key) {
            return Ok(next.run(request).await);
        }
    }

    Err(StatusCode::UNAUTHORIZED)
}
