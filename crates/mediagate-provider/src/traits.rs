//! Media provider abstraction trait

use async_trait::async_trait;
use mediagate_core::{AppError, UploadOptions, UploadResult};
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Media provider operation errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Provider(err.to_string())
    }
}

/// Media provider trait
///
/// A provider stores one file per call and reports where it can be retrieved. Each call
/// is independent: no retries, no sessions.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Upload a file from a stream/reader
    ///
    /// # Arguments
    /// * `options` - Folder, resource classification and optional transformation
    /// * `filename` - Original client filename
    /// * `content_type` - Declared MIME type of the content
    /// * `content_length` - Size of the content when known
    /// * `reader` - Async reader that provides the file content; consumed until EOF
    async fn upload_stream(
        &self,
        options: &UploadOptions,
        filename: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> ProviderResult<UploadResult>;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}
