//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Build router → Bind listener → Spawn accept loop
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGINT → Trigger graceful shutdown
//!     (all other signals keep their platform default)
//!
//! Server states:
//!     Created → Listening → Draining → Stopped
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then router, then listener
//! - Ordered shutdown: stop accept, drain, close
//! - Shutdown has a deadline: connections still open when it passes are
//!   forcibly aborted
//! - The process exits 0 whether the drain was clean or forced; the outcome
//!   is surfaced as a log field instead of an exit code

pub mod shutdown;
pub mod signals;

pub use shutdown::{DrainOutcome, ServerState, Shutdown};
pub use signals::shutdown_signal;
