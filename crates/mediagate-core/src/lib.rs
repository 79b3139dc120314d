//! Mediagate Core Library
//!
//! This crate provides the upload domain models, error types, configuration, and the
//! upload filter shared by the provider client and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, ProviderCredentials};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    MediaCategory, ResourceType, Transformation, UploadOptions, UploadResponse, UploadResult,
    UploadedFile,
};
pub use validation::{UploadFilter, UploadFilterError};
