//! Upload service
//!
//! Maps a validated file to provider options, performs the single provider call, and
//! builds the client response: validated file → options → provider → response.

use std::io::Cursor;
use std::sync::Arc;

use mediagate_core::{
    AppError, MediaCategory, UploadOptions, UploadResponse, UploadResult, UploadedFile,
};
use mediagate_provider::MediaProvider;

use crate::state::{AppState, UploadSettings};

pub const IMAGE_UPLOADED_MESSAGE: &str = "Image uploaded and manipulated successfully";
pub const FILE_UPLOADED_MESSAGE: &str = "File uploaded successfully";

pub struct UploadService {
    provider: Arc<dyn MediaProvider>,
    settings: UploadSettings,
}

impl UploadService {
    pub fn new(state: &AppState) -> Self {
        Self {
            provider: state.provider.clone(),
            settings: state.upload.clone(),
        }
    }

    /// Provider options for a file, chosen by its MIME category.
    pub fn options_for(&self, file: &UploadedFile) -> UploadOptions {
        UploadOptions::for_category(
            file.category(),
            &self.settings.folder,
            self.settings.image_limit,
        )
    }

    /// Forward a validated file to the provider. Exactly one provider call, no retries.
    pub async fn upload(&self, file: UploadedFile) -> Result<UploadResponse, AppError> {
        let category = file.category();
        let options = self.options_for(&file);

        tracing::info!(
            original_filename = %file.original_filename,
            content_type = %file.content_type,
            file_size = file.size(),
            category = %category,
            provider = self.provider.name(),
            "Forwarding upload to media provider"
        );

        let UploadResult {
            secure_url,
            resource_type,
        } = self
            .provider
            .upload_stream(
                &options,
                &file.original_filename,
                &file.content_type,
                Some(file.size() as u64),
                Box::pin(Cursor::new(file.data.clone())),
            )
            .await?;

        tracing::info!(
            secure_url = %secure_url,
            resource_type = %resource_type,
            "Upload to media provider successful"
        );

        let message = match category {
            MediaCategory::Image => IMAGE_UPLOADED_MESSAGE,
            _ => FILE_UPLOADED_MESSAGE,
        };

        Ok(UploadResponse {
            message: message.to_string(),
            url: secure_url,
            content_type: file.content_type,
        })
    }
}
