//! Route registration subsystem.
//!
//! # Data Flow
//! ```text
//! AppState (config, start time)
//!     → public.rs (no authentication)
//!     → private.rs (bearer API key required)
//!     → swagger.rs (OpenAPI document + Swagger UI)
//!     → merged into one Router, handed to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Route groups are purely declarative; handlers hold no business logic
//! - Each group assembles its own Router so callers can mount a subset

pub mod private;
pub mod public;
pub mod swagger;

use axum::Router;

use crate::http::server::AppState;

/// Assemble the scaffold's route groups into one router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(public::routes(state.clone()))
        .merge(private::routes(state))
        .merge(swagger::routes())
}
