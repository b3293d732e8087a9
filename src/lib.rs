//! Minimal HTTP API server scaffold.
//!
//! Parses a config file, builds a router from three route groups (public,
//! private, swagger documentation), optionally mounts static files ahead of
//! them, and runs the server with signal-triggered graceful shutdown.
//!
//! # Architecture Overview
//!
//! ```text
//!  --config-path ──▶ config ──▶ routes ──▶ http (bind + accept loop)
//!                                              │
//!          SIGINT ──▶ lifecycle ──▶ drain up to deadline ──▶ exit 0
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routes;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::{ApiServer, RunningServer};
pub use lifecycle::Shutdown;
