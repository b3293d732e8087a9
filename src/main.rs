use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use apiserver::config::load_config;
use apiserver::lifecycle::{signals, DrainOutcome};
use apiserver::observability::{logging, metrics};
use apiserver::ApiServer;

/// Minimal HTTP API server scaffold.
#[derive(Parser)]
#[command(name = "apiserver", version)]
struct Args {
    /// Path to the configuration file.
    #[arg(long = "config-path", default_value = "configs/apiserver.toml")]
    config_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config_path)?;
    logging::init(&config.observability.log_level);

    tracing::info!(
        config_path = %args.config_path.display(),
        host = %config.server.host,
        port = config.server.port,
        grace_period_secs = config.shutdown.grace_period_secs,
        "Configuration loaded"
    );
    if config.auth.api_key.is_empty() || config.auth.api_key == "CHANGE_ME_IN_PRODUCTION" {
        tracing::warn!("auth.api_key is unset or the placeholder; change it before exposing private routes");
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let grace = Duration::from_secs(config.shutdown.grace_period_secs);
    let server = ApiServer::new(config);

    // Bind errors are fatal: a server that cannot listen must not linger.
    let running = server.start().await?;

    signals::shutdown_signal().await;

    let outcome = running.shutdown(grace).await;
    match outcome {
        DrainOutcome::Drained => {
            tracing::info!(outcome = outcome.as_str(), "API server is shutting down");
        }
        DrainOutcome::DeadlineExpired => {
            tracing::warn!(outcome = outcome.as_str(), "API server is shutting down");
        }
    }

    Ok(())
}
