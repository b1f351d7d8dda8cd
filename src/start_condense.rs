//! Startup helpers for the condense server binary.

use std::process::ExitCode;

use crate::server::{self, AppState};

/// Environment variable overriding the server port.
const PORT_ENV: &str = "CONDENSE_PORT";

/// Run the server (used by the `condense-server` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting condense v{}", env!("CARGO_PKG_VERSION"));

    let state = match AppState::from_env() {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Failed to create state: {err}");
            return ExitCode::from(1);
        }
    };

    let port = get_port();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            tracing::error!("Failed to create runtime: {err}");
            return ExitCode::from(1);
        }
    };

    let result = rt.block_on(async {
        // Best effort: the first request also waits for the model if needed.
        if let Err(err) = state.warm_up().await {
            tracing::warn!("Model warm-up failed: {err}");
        }

        server::run_server_with_shutdown(state, port, shutdown_signal()).await
    });

    if let Err(err) = result {
        tracing::error!("Server error: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Get the configured server port.
#[must_use]
pub fn get_port() -> u16 {
    std::env::var(PORT_ENV)
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(server::DEFAULT_PORT)
}

/// Resolve when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
