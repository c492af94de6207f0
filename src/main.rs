//! HTTP server for the Pay-Cycle Engine.
//!
//! Environment:
//! - `PAYCYCLE_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `PAYCYCLE_BIND`: listen address (default `0.0.0.0:8080`)
//! - `PAYCYCLE_LOG_JSON`: emit JSON log lines (default `false`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pay_cycle_engine::api::{AppState, create_router};
use pay_cycle_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND: &str = "0.0.0.0:8080";

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("PAYCYCLE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn run() -> Result<(), String> {
    let config_dir = env::var("PAYCYCLE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind = env::var("PAYCYCLE_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());

    let config = ConfigLoader::load(&config_dir).map_err(|e| format!("config load failed: {e}"))?;
    info!(
        config_dir = %config_dir,
        engine = %config.engine().name,
        version = %config.engine().version,
        plans = config.plans().count(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| format!("bind {bind} failed: {e}"))?;
    info!(bind = %bind, "Pay-cycle engine listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            wait_for_shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Pay-cycle engine stopped");
            ExitCode::FAILURE
        }
    }
}
