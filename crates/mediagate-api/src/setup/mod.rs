//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded [`Config`] to a router ready to serve.

pub mod provider;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use mediagate_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.json_logs())?;

    tracing::info!(
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    let provider = provider::setup_provider(&config)?;

    let state = Arc::new(AppState::new(&config, provider));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
