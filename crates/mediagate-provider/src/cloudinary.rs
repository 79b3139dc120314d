//! Cloudinary upload client
//!
//! Uses the signed upload API: `POST {api_base}/{cloud_name}/{resource_type}/upload` with a
//! multipart body. Every parameter except `file`, `api_key`, `resource_type`, `cloud_name`
//! and `signature_algorithm` is signed, sorted by name, as `k=v&k2=v2{api_secret}`.

use crate::{MediaProvider, ProviderError, ProviderResult};
use async_trait::async_trait;
use mediagate_core::models::CropMode;
use mediagate_core::{ProviderCredentials, ResourceType, Transformation, UploadOptions, UploadResult};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::pin::Pin;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

const SIGNATURE_ALGORITHM: &str = "sha256";

#[derive(Debug, Deserialize)]
struct UploadApiResponse {
    secure_url: String,
    resource_type: String,
}

#[derive(Debug, Deserialize)]
struct ErrorApiResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct CloudinaryProvider {
    credentials: ProviderCredentials,
    api_base: String,
    http_client: Client,
}

impl Debug for CloudinaryProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CloudinaryProvider")
            .field("cloud_name", &self.credentials.cloud_name)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl CloudinaryProvider {
    pub fn new(
        credentials: ProviderCredentials,
        api_base: impl Into<String>,
        timeout: Option<Duration>,
    ) -> ProviderResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            ProviderError::ConfigError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            credentials,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn upload_url(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/{}/{}/upload",
            self.api_base,
            self.credentials.cloud_name,
            resource_type.as_str()
        )
    }

    /// `c_limit,h_800,w_800`
    pub fn transformation_param(transformation: &Transformation) -> String {
        let crop = match transformation.crop {
            CropMode::Limit => "limit",
        };
        format!(
            "c_{},h_{},w_{}",
            crop, transformation.height, transformation.width
        )
    }

    /// Parameters covered by the signature, keyed by name so iteration is sorted.
    fn signed_params(options: &UploadOptions, timestamp: i64) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("folder", options.folder.clone());
        params.insert("timestamp", timestamp.to_string());
        if let Some(ref transformation) = options.transformation {
            params.insert("transformation", Self::transformation_param(transformation));
        }
        params
    }

    pub fn sign(params: &BTreeMap<&'static str, String>, api_secret: &str) -> String {
        let to_sign = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorApiResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.to_string()
                }
            })
    }
}

#[async_trait]
impl MediaProvider for CloudinaryProvider {
    #[tracing::instrument(skip(self, reader), fields(folder = %options.folder))]
    async fn upload_stream(
        &self,
        options: &UploadOptions,
        filename: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> ProviderResult<UploadResult> {
        let resource_type = options.resource_type.unwrap_or(ResourceType::Image);
        let params = Self::signed_params(options, chrono::Utc::now().timestamp());
        let signature = Self::sign(&params, &self.credentials.api_secret);

        let body = Body::wrap_stream(ReaderStream::new(reader));
        let file_part = match content_length {
            Some(len) => Part::stream_with_length(body, len),
            None => Part::stream(body),
        }
        .file_name(filename.to_string());

        let mut form = Form::new()
            .part("file", file_part)
            .text("api_key", self.credentials.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM);
        for (name, value) in params {
            form = form.text(name, value);
        }

        let url = self.upload_url(resource_type);
        tracing::debug!(
            url = %url,
            resource_type = %resource_type,
            content_type = %content_type,
            content_length = ?content_length,
            "Uploading to Cloudinary"
        );

        let response = self.http_client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message: Self::error_message(&error_text),
            });
        }

        let uploaded: UploadApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            secure_url = %uploaded.secure_url,
            resource_type = %uploaded.resource_type,
            "Cloudinary upload completed"
        );

        Ok(UploadResult {
            secure_url: uploaded.secure_url,
            resource_type: uploaded.resource_type,
        })
    }

    fn name(&self) -> &'static str {
        "cloudinary"
    }
}
