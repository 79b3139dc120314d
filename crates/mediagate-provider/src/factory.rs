use crate::{CloudinaryProvider, MediaProvider, ProviderResult};
use mediagate_core::Config;
use std::sync::Arc;
use std::time::Duration;

/// Create the media provider client based on configuration
pub fn create_provider(config: &Config) -> ProviderResult<Arc<dyn MediaProvider>> {
    let timeout = match config.provider_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    let provider = CloudinaryProvider::new(
        config.provider.clone(),
        config.provider_api_base.clone(),
        timeout,
    )?;

    tracing::info!(
        cloud_name = %config.provider.cloud_name,
        api_base = %config.provider_api_base,
        "Media provider initialized"
    );

    Ok(Arc::new(provider))
}
