//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; request ID flows through all subsystems
//! - Metrics are cheap (atomic increments) and recorded in one middleware
//! - The exporter is optional and never blocks startup

pub mod logging;
pub mod metrics;
