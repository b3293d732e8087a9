//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router: static file mount first, then route groups
//! - Wire up middleware (timeouts, request ID, tracing, metrics)
//! - Bind the listener synchronously; run the accept loop on its own task
//! - Drain connections on shutdown, bounded by a deadline
//!
//! # Lifecycle
//! ```text
//! ApiServer (Created)
//!     → start(): bind, spawn accept loop → RunningServer (Listening)
//!     → shutdown(grace): stop accepting  → Draining
//!     → all closed or deadline passed    → Stopped
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{middleware, Router};
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::{DrainOutcome, ServerState, Shutdown};
use crate::net::{ConnectionGuard, ConnectionTracker, Listener, ListenerError};
use crate::net::listener::ConnectionPermit;
use crate::observability::metrics;
use crate::routes;

/// Fixed per-connection read timeout, to mitigate slow-client resource
/// exhaustion.
pub const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed per-connection write timeout, applied as a deadline on producing
/// the response.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(15);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

/// Error starting the server. Always fatal to the caller.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("failed to bind listener: {0}")]
    Bind(#[from] ListenerError),
}

/// HTTP server in its pre-start state.
pub struct ApiServer {
    router: Router,
    config: ServerConfig,
}

impl ApiServer {
    /// Create a server with the scaffold's own route groups registered.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.clone());
        let api = routes::api_router(state);
        Self::with_router(config, api)
    }

    /// Create a server around an externally assembled API router.
    ///
    /// This is the registration seam: callers bring their own routes, this
    /// type owns everything below them. The static file mount (when
    /// configured) and the middleware stack are applied here.
    pub fn with_router(config: ServerConfig, api: Router) -> Self {
        let router = Self::build_router(&config, api);
        Self { router, config }
    }

    /// Build the full router with all middleware layers.
    ///
    /// The static mount owns its whole prefix: requests under it are served
    /// as files and never reach the API routes.
    fn build_router(config: &ServerConfig, api: Router) -> Router {
        let mut router = api;
        if let Some((prefix, dir)) = config.static_files.mount() {
            tracing::info!(prefix = %prefix, path = %dir.display(), "Static files mounted");
            router = Router::new()
                .nest_service(&prefix, ServeDir::new(dir))
                .merge(router);
        }
        router
            .layer(TimeoutLayer::new(WRITE_TIMEOUT))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(metrics::track_requests))
    }

    /// Bind the listener and spawn the accept loop.
    ///
    /// Binding is synchronous: a port conflict surfaces here as an error
    /// rather than inside the fire-and-forget accept loop, so the process
    /// never reports a listening state it does not have. Returns as soon as
    /// the accept loop task is running.
    pub async fn start(self) -> Result<RunningServer, StartError> {
        let listener = Listener::bind(&self.config.server).await?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        let shutdown = Shutdown::new();
        let (state_tx, state_rx) = watch::channel(ServerState::Listening);
        let (force_tx, force_rx) = watch::channel(false);
        let tracker = ConnectionTracker::new();

        let loop_task = tokio::spawn(accept_loop(
            listener,
            self.router,
            shutdown.clone(),
            force_rx,
            tracker,
            state_tx,
        ));

        tracing::info!(address = %local_addr, "HTTP server listening");

        Ok(RunningServer {
            local_addr,
            shutdown,
            force_tx,
            state_rx,
            loop_task,
        })
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// A started server: the bound socket address plus its lifecycle controls.
///
/// Dropping this handle tears the server down; keep it alive for as long as
/// the server should run.
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    force_tx: watch::Sender<bool>,
    state_rx: watch::Receiver<ServerState>,
    loop_task: JoinHandle<()>,
}

impl RunningServer {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServerState {
        *self.state_rx.borrow()
    }

    /// Watch lifecycle transitions (Listening → Draining → Stopped).
    pub fn state_watch(&self) -> watch::Receiver<ServerState> {
        self.state_rx.clone()
    }

    /// Cancellation notification for consumers that coordinate their own
    /// cleanup instead of calling [`shutdown`](Self::shutdown) synchronously.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown.subscribe()
    }

    /// Stop accepting new connections immediately and give in-flight
    /// requests up to `grace` to finish. Whatever is still running when the
    /// deadline passes is forcibly aborted.
    ///
    /// A zero grace period closes idle connections at once and gives
    /// in-flight handlers no extra time.
    pub async fn shutdown(mut self, grace: Duration) -> DrainOutcome {
        self.shutdown.trigger();

        match tokio::time::timeout(grace, &mut self.loop_task).await {
            Ok(_) => DrainOutcome::Drained,
            Err(_) => {
                let _ = self.force_tx.send(true);
                let _ = (&mut self.loop_task).await;
                DrainOutcome::DeadlineExpired
            }
        }
    }
}

/// Accept connections until shutdown is triggered, then drain.
async fn accept_loop(
    listener: Listener,
    router: Router,
    shutdown: Shutdown,
    force_rx: watch::Receiver<bool>,
    tracker: ConnectionTracker,
    state_tx: watch::Sender<ServerState>,
) {
    let mut shutdown_rx = shutdown.subscribe();

    loop {
        // Subscribed before the accept await so a trigger arriving during
        // the handoff still reaches the new connection.
        let conn_shutdown_rx = shutdown.subscribe();

        tokio::select! {
            // Shutdown wins over a simultaneously ready accept.
            biased;
            _ = shutdown_rx.recv() => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr, permit)) => {
                    serve_connection(
                        stream,
                        peer_addr,
                        router.clone(),
                        conn_shutdown_rx,
                        force_rx.clone(),
                        tracker.track(),
                        permit,
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Accept failed");
                }
            },
        }
    }

    // Close the socket before draining; nothing is accepted past this point.
    drop(listener);
    let _ = state_tx.send(ServerState::Draining);
    tracing::info!(
        active_connections = tracker.active_count(),
        "Draining connections"
    );

    tracker.drained().await;

    let _ = state_tx.send(ServerState::Stopped);
    tracing::info!("HTTP server stopped");
}

/// Serve one connection on its own task.
fn serve_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    router: Router,
    mut graceful_rx: broadcast::Receiver<()>,
    mut force_rx: watch::Receiver<bool>,
    guard: ConnectionGuard,
    permit: ConnectionPermit,
) {
    tokio::spawn(async move {
        let connection_id = guard.id();
        let service = TowerToHyperService::new(router);

        let mut builder = auto::Builder::new(TokioExecutor::new());
        builder
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(READ_TIMEOUT);

        let conn = builder.serve_connection_with_upgrades(TokioIo::new(stream), service);
        tokio::pin!(conn);

        let mut draining = false;
        loop {
            tokio::select! {
                result = conn.as_mut() => {
                    if let Err(e) = result {
                        tracing::debug!(
                            connection_id = %connection_id,
                            peer_addr = %peer_addr,
                            error = %e,
                            "Connection error"
                        );
                    }
                    break;
                }
                _ = graceful_rx.recv(), if !draining => {
                    draining = true;
                    conn.as_mut().graceful_shutdown();
                }
                changed = force_rx.changed(), if draining => {
                    if changed.is_err() || *force_rx.borrow() {
                        tracing::debug!(
                            connection_id = %connection_id,
                            "Connection aborted at shutdown deadline"
                        );
                        break;
                    }
                }
            }
        }

        drop(permit);
        drop(guard);
    });
}
