//! OS signal handling.
//!
//! # Responsibilities
//! - Register the interrupt handler (SIGINT / Ctrl+C)
//! - Translate the signal into the drain path
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Only the interrupt signal is intercepted; SIGTERM, SIGQUIT and SIGKILL
//!   keep their platform default of immediate termination without a drain.
//!   This is a deliberate half-graceful policy: one well-defined graceful
//!   path, everything else behaves like a kill.

/// Wait for the interrupt signal (Ctrl+C).
///
/// Resolves exactly once; the handler registration lives only as long as
/// this future, so a second interrupt falls through to the platform default.
pub async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
