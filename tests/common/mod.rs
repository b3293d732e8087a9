//! Shared utilities for integration testing.

use apiserver::config::ServerConfig;
use apiserver::http::{ApiServer, RunningServer};

/// Config bound to a loopback ephemeral port so tests never collide.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config
}

/// Start the scaffold server, returning the handle and its base URL.
#[allow(dead_code)]
pub async fn start_server(config: ServerConfig) -> (RunningServer, String) {
    let server = ApiServer::new(config);
    let running = server.start().await.expect("server should bind");
    let url = format!("http://{}", running.local_addr());
    (running, url)
}

/// Start a server around a caller-supplied router.
#[allow(dead_code)]
pub async fn start_with_router(
    config: ServerConfig,
    router: axum::Router,
) -> (RunningServer, String) {
    let server = ApiServer::with_router(config, router);
    let running = server.start().await.expect("server should bind");
    let url = format!("http://{}", running.local_addr());
    (running, url)
}

/// Client without connection pooling so test servers shut down cleanly.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
