//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (net layer)
//!     → server.rs (per-connection serving, read/write timeouts)
//!     → request.rs (attach request ID)
//!     → static mount or route groups (routes layer)
//!     → Send response to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{ApiServer, AppState, RunningServer, StartError, READ_TIMEOUT, WRITE_TIMEOUT};
