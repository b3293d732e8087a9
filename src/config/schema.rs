//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the API
//! server. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a minimal config file works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the API server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP listener settings (host, port, connection limit).
    pub server: HttpConfig,

    /// Optional static file serving.
    pub static_files: StaticConfig,

    /// API key protection for the private route group.
    pub auth: AuthConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to bind. Port 0 binds an ephemeral port.
    pub port: u16,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_connections: 10_000,
        }
    }
}

impl HttpConfig {
    /// The `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Static file serving configuration.
///
/// Files are served only when both `prefix` and `path` are set and
/// non-empty; otherwise no static handler is mounted.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StaticConfig {
    /// URL prefix the files are mounted under (e.g., "/static").
    pub prefix: Option<String>,

    /// Directory the files are read from.
    pub path: Option<PathBuf>,
}

impl StaticConfig {
    /// Returns the normalized mount point and directory, or `None` when
    /// static serving is not configured.
    ///
    /// The prefix keeps its leading slash and loses any trailing slash, so
    /// "/static/" and "/static" mount identically.
    pub fn mount(&self) -> Option<(String, PathBuf)> {
        let prefix = self.prefix.as_deref()?.trim();
        let path = self.path.as_deref()?;
        if prefix.is_empty() || path.as_os_str().is_empty() {
            return None;
        }
        let prefix = prefix.trim_end_matches('/').to_string();
        Some((prefix, path.to_path_buf()))
    }
}

/// API key configuration for the private route group.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token required by private routes.
    pub api_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // WARNING: This is a placeholder! Change this in production.
            api_key: "CHANGE_ME_IN_PRODUCTION".to_string(),
        }
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds in-flight requests are given to finish once the interrupt
    /// signal is received. Zero forces immediate closure.
    pub grace_period_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 10,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
