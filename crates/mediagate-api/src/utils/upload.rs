//! Multipart extraction for the upload endpoint

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::BytesMut;
use mediagate_core::constants::FILE_FIELD_NAME;
use mediagate_core::{AppError, UploadFilter, UploadFilterError, UploadedFile};

pub const UNEXPECTED_FIELD: &str = "Unexpected field";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadLimit(UploadFilterError::FILE_TOO_LARGE.to_string())
    } else {
        AppError::InvalidInput(err.body_text())
    }
}

/// Extract the single file part named `file` and buffer it in memory.
///
/// Parts without a filename are plain form fields and are skipped. A file part under any
/// other name, or a second `file` part, is rejected. The type filter runs on the part
/// headers before any content is read, and the size limit is checked chunk by chunk so an
/// oversized file is never fully buffered.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    filter: &UploadFilter,
) -> Result<UploadedFile, AppError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(original_filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let field_name = field.name().unwrap_or_default();
        if field_name != FILE_FIELD_NAME || uploaded.is_some() {
            tracing::debug!(field = %field_name, "Rejected unexpected file field");
            return Err(AppError::UploadLimit(UNEXPECTED_FIELD.to_string()));
        }

        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        filter.check_type(&original_filename, &content_type)?;

        let mut buffer = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            filter.check_size(buffer.len() + chunk.len())?;
            buffer.extend_from_slice(&chunk);
        }

        uploaded = Some(UploadedFile::new(
            original_filename,
            content_type,
            buffer.freeze(),
        ));
    }

    uploaded.ok_or(AppError::NoFileUploaded)
}
