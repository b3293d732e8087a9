//! Shutdown coordination for the API server.

use tokio::sync::broadcast;

/// Lifecycle state of the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Server built but not yet bound.
    Created,
    /// Socket bound, accept loop running.
    Listening,
    /// No longer accepting; in-flight connections finishing.
    Draining,
    /// All connections closed or aborted. Terminal.
    Stopped,
}

impl std::fmt::Display for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ServerState::Created => "created",
            ServerState::Listening => "listening",
            ServerState::Draining => "draining",
            ServerState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// How a drain phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Every in-flight connection finished before the deadline.
    Drained,
    /// The deadline passed first; remaining connections were aborted.
    DeadlineExpired,
}

impl DrainOutcome {
    /// Stable label for the shutdown log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrainOutcome::Drained => "drained",
            DrainOutcome::DeadlineExpired => "deadline_expired",
        }
    }
}

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
/// Consumers that prefer a cancellation notification over calling
/// [`shutdown`](crate::http::RunningServer::shutdown) synchronously can hold
/// a subscription instead.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_reaches_all_subscribers() {
        let shutdown = Shutdown::new();
        let mut rx1 = shutdown.subscribe();
        let mut rx2 = shutdown.subscribe();

        shutdown.trigger();

        rx1.recv().await.unwrap();
        rx2.recv().await.unwrap();
    }

    #[test]
    fn trigger_without_subscribers_is_harmless() {
        Shutdown::new().trigger();
    }

    #[test]
    fn drain_outcome_labels() {
        assert_eq!(DrainOutcome::Drained.as_str(), "drained");
        assert_eq!(DrainOutcome::DeadlineExpired.as_str(), "deadline_expired");
    }
}
