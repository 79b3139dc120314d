//! Configuration module
//!
//! Everything the upload path needs (limits, allowed types, provider credentials, gate
//! credentials) lives in one [`Config`] value built once at startup and passed into the
//! application state. Nothing reads the environment after that.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ALLOWED_FILE_TYPES, DEFAULT_CLOUDINARY_API_BASE, DEFAULT_IMAGE_MAX_HEIGHT,
    DEFAULT_IMAGE_MAX_WIDTH, DEFAULT_MAX_UPLOAD_SIZE_MB, DEFAULT_UPLOAD_FOLDER,
};
use crate::models::Transformation;
use crate::validation::UploadFilter;

const DEFAULT_PORT: u16 = 5000;
const MIN_MASTER_API_KEY_LEN: usize = 32;
const MIN_JWT_SECRET_LEN: usize = 32;

/// Media provider account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl ProviderCredentials {
    /// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    pub fn from_url(url: &str) -> Result<Self, anyhow::Error> {
        let rest = url
            .trim()
            .strip_prefix("cloudinary://")
            .ok_or_else(|| anyhow::anyhow!("CLOUDINARY_URL must start with cloudinary://"))?;
        let (userinfo, cloud_name) = rest
            .rsplit_once('@')
            .ok_or_else(|| anyhow::anyhow!("CLOUDINARY_URL is missing the cloud name"))?;
        let (api_key, api_secret) = userinfo
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("CLOUDINARY_URL is missing the API secret"))?;
        let cloud_name = cloud_name.trim_end_matches('/');

        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            return Err(anyhow::anyhow!("CLOUDINARY_URL has empty components"));
        }

        Ok(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        })
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Upload filter
    pub max_upload_size_bytes: usize,
    pub allowed_file_types: Vec<String>,
    pub upload_folder: String,
    pub image_max_width: u32,
    pub image_max_height: u32,
    // Media provider
    pub provider: ProviderCredentials,
    pub provider_api_base: String,
    /// Client-side timeout for provider calls; 0 leaves timing out to the provider.
    pub provider_timeout_secs: u64,
    // Authorization gate
    pub master_api_key: Option<String>,
    pub jwt_secret: Option<String>,
    // Logging
    pub log_format: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a numeric variable, falling back to `default` only when it is unset.
fn parse_number<T, F>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a valid number", key)),
        None => Ok(default),
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` when present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = Self::from_vars(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup. Does not validate.
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;

        let max_upload_size_mb: usize =
            parse_number(&lookup, "MAX_UPLOAD_SIZE_MB", DEFAULT_MAX_UPLOAD_SIZE_MB)?;
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?;

        let allowed_file_types = match lookup("ALLOWED_FILE_TYPES") {
            Some(types) => types
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_ALLOWED_FILE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let provider = match non_empty(lookup("CLOUDINARY_URL")) {
            Some(url) => ProviderCredentials::from_url(&url)?,
            None => ProviderCredentials {
                cloud_name: lookup("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
                api_key: lookup("CLOUDINARY_API_KEY").unwrap_or_default(),
                api_secret: lookup("CLOUDINARY_API_SECRET").unwrap_or_default(),
            },
        };

        Ok(Config {
            server_port,
            environment,
            cors_origins,
            max_upload_size_bytes,
            allowed_file_types,
            upload_folder: non_empty(lookup("UPLOAD_FOLDER"))
                .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
            image_max_width: parse_number(&lookup, "IMAGE_MAX_WIDTH", DEFAULT_IMAGE_MAX_WIDTH)?,
            image_max_height: parse_number(&lookup, "IMAGE_MAX_HEIGHT", DEFAULT_IMAGE_MAX_HEIGHT)?,
            provider,
            provider_api_base: non_empty(lookup("CLOUDINARY_API_BASE"))
                .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_BASE.to_string()),
            provider_timeout_secs: parse_number(&lookup, "PROVIDER_TIMEOUT_SECS", 0)?,
            master_api_key: non_empty(lookup("MASTER_API_KEY")),
            jwt_secret: non_empty(lookup("JWT_SECRET")),
            log_format: lookup("LOG_FORMAT")
                .unwrap_or_else(|| "compact".to_string())
                .to_lowercase(),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    pub fn upload_filter(&self) -> UploadFilter {
        UploadFilter::new(self.max_upload_size_bytes, self.allowed_file_types.clone())
    }

    pub fn image_limit(&self) -> Transformation {
        Transformation::limit(self.image_max_width, self.image_max_height)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.allowed_file_types.is_empty() {
            return Err(anyhow::anyhow!("ALLOWED_FILE_TYPES must list at least one type"));
        }

        if self.image_max_width == 0 || self.image_max_height == 0 {
            return Err(anyhow::anyhow!(
                "IMAGE_MAX_WIDTH and IMAGE_MAX_HEIGHT must be greater than 0"
            ));
        }

        let p = &self.provider;
        if p.cloud_name.is_empty() || p.api_key.is_empty() || p.api_secret.is_empty() {
            return Err(anyhow::anyhow!(
                "Provider credentials missing: set CLOUDINARY_URL or CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET"
            ));
        }

        if self.master_api_key.is_none() && self.jwt_secret.is_none() {
            return Err(anyhow::anyhow!(
                "At least one of MASTER_API_KEY or JWT_SECRET must be set for authentication"
            ));
        }

        if let Some(ref key) = self.master_api_key {
            if key.len() < MIN_MASTER_API_KEY_LEN {
                return Err(anyhow::anyhow!(
                    "MASTER_API_KEY must be at least 32 characters long"
                ));
            }
        }

        if let Some(ref secret) = self.jwt_secret {
            if secret.len() < MIN_JWT_SECRET_LEN {
                return Err(anyhow::anyhow!(
                    "JWT_SECRET must be at least 32 characters long"
                ));
            }
        }

        Ok(())
    }
}
