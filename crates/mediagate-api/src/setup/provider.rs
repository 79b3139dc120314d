use anyhow::{Context, Result};
use mediagate_core::Config;
use mediagate_provider::{create_provider, MediaProvider};
use std::sync::Arc;

/// Build the media provider client from configuration
pub fn setup_provider(config: &Config) -> Result<Arc<dyn MediaProvider>> {
    create_provider(config).context("Failed to initialize media provider")
}
