//! Application state shared by the handlers.
//!
//! Built once at startup from [`Config`]; nothing in here changes while the server runs.

use mediagate_core::{Config, Transformation, UploadFilter};
use mediagate_provider::MediaProvider;
use std::sync::Arc;

/// Upload settings derived from configuration.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub filter: UploadFilter,
    pub folder: String,
    pub image_limit: Transformation,
}

impl UploadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filter: config.upload_filter(),
            folder: config.upload_folder.clone(),
            image_limit: config.image_limit(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MediaProvider>,
    pub upload: UploadSettings,
}

impl AppState {
    pub fn new(config: &Config, provider: Arc<dyn MediaProvider>) -> Self {
        Self {
            provider,
            upload: UploadSettings::from_config(config),
        }
    }
}
