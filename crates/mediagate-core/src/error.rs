//! Error types module
//!
//! All failures on the upload path are unified under [`AppError`]. Each variant
//! self-describes how it is presented over HTTP through [`ErrorMetadata`], so the
//! API layer only has to render what the error reports about itself.

use crate::validation::UploadFilterError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for rejected credentials and similar
    Warn,
    /// Error level - for provider and unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "PROVIDER_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details must never reach the client
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A limit enforced while parsing the multipart body (size, unexpected field).
    #[error("Upload limit: {0}")]
    UploadLimit(String),

    #[error("Unsupported file type: {filename} ({content_type})")]
    UnsupportedFileType {
        filename: String,
        content_type: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UploadFilterError> for AppError {
    fn from(err: UploadFilterError) -> Self {
        match err {
            UploadFilterError::FileTooLarge { .. } => {
                AppError::UploadLimit(UploadFilterError::FILE_TOO_LARGE.to_string())
            }
            UploadFilterError::UnsupportedType {
                filename,
                content_type,
            } => AppError::UnsupportedFileType {
                filename,
                content_type,
            },
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::UploadLimit(_) => (400, "UPLOAD_LIMIT", false, LogLevel::Debug),
        AppError::UnsupportedFileType { .. } => {
            (400, "UNSUPPORTED_FILE_TYPE", false, LogLevel::Debug)
        }
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NoFileUploaded => (400, "NO_FILE_UPLOADED", false, LogLevel::Debug),
        AppError::Unauthorized(_) => (401, "UNAUTHORIZED", false, LogLevel::Warn),
        AppError::Provider(_) => (500, "PROVIDER_ERROR", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logs
    pub fn error_type(&self) -> &str {
        match self {
            AppError::UploadLimit(_) => "UploadLimit",
            AppError::UnsupportedFileType { .. } => "UnsupportedFileType",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NoFileUploaded => "NoFileUploaded",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Provider(_) => "Provider",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::UploadLimit(ref msg) => msg.clone(),
            AppError::UnsupportedFileType { .. } => "Error: File type not supported!".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NoFileUploaded => "No file uploaded".to_string(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::Provider(_) => "Cloudinary upload failed".to_string(),
            AppError::Internal(_) => "Server error during file upload".to_string(),
        }
    }
}
