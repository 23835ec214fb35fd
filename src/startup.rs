//! Startup helpers for the memoline server.
//!
//! Reads configuration from the environment (a `.env` file is honored if
//! present), wires the Supabase-backed store into the application state,
//! and runs the server on a fresh Tokio runtime.

use std::process::ExitCode;

use crate::server::{self, AppState};
use crate::store::StoreConfig;

/// Environment variable overriding the listen port.
const PORT_ENV: &str = "MEMOLINE_PORT";

/// Run the server (used by the `memoline` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting memoline v{}", env!("CARGO_PKG_VERSION"));

    let config = match StoreConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            return ExitCode::from(1);
        }
    };
    tracing::info!("Conversation backend: {}", config.base_url);
    tracing::info!(
        "Table: {} (ordered by {}, empty results: {:?})",
        config.table,
        config.order_by.column(),
        config.empty_result
    );

    let state = match AppState::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e}");
            return ExitCode::from(1);
        }
    };

    let port = get_port();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server(state, port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Get configured server port.
#[must_use]
pub fn get_port() -> u16 {
    std::env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(server::DEFAULT_PORT)
}
