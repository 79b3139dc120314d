use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// A file buffered from the multipart body. Held in memory only.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(original_filename: String, content_type: String, data: Bytes) -> Self {
        Self {
            original_filename,
            content_type,
            data,
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn category(&self) -> MediaCategory {
        MediaCategory::from_content_type(&self.content_type)
    }
}

/// Media category derived from the top-level MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Image,
    Audio,
    Video,
    Other,
}

impl MediaCategory {
    pub fn from_content_type(content_type: &str) -> Self {
        let top_level = content_type.split('/').next().unwrap_or("").trim();
        match top_level {
            "image" => MediaCategory::Image,
            "audio" => MediaCategory::Audio,
            "video" => MediaCategory::Video,
            _ => MediaCategory::Other,
        }
    }
}

impl Display for MediaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::Other => write!(f, "other"),
        }
    }
}

/// Provider-side storage classification. Not a transcoding instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Raw,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Shrink to fit the box, keep aspect ratio, never enlarge.
    Limit,
}

/// Incoming image transformation applied by the provider before storing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub width: u32,
    pub height: u32,
    pub crop: CropMode,
}

impl Transformation {
    pub fn limit(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            crop: CropMode::Limit,
        }
    }
}

/// What the provider is asked to do with one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub folder: String,
    /// `None` lets the provider use its default (image) classification.
    pub resource_type: Option<ResourceType>,
    pub transformation: Option<Transformation>,
}

impl UploadOptions {
    /// Images are resized with `image_limit`; audio and anything unrecognised go up as
    /// raw resources; video is tagged as video.
    pub fn for_category(category: MediaCategory, folder: &str, image_limit: Transformation) -> Self {
        let (resource_type, transformation) = match category {
            MediaCategory::Image => (None, Some(image_limit)),
            MediaCategory::Audio => (Some(ResourceType::Raw), None),
            MediaCategory::Video => (Some(ResourceType::Video), None),
            MediaCategory::Other => (Some(ResourceType::Raw), None),
        };
        Self {
            folder: folder.to_string(),
            resource_type,
            transformation,
        }
    }
}

/// Result reported by the provider once the upload completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub secure_url: String,
    pub resource_type: String,
}

/// Body returned to the client on a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Provider-hosted retrieval URL
    pub url: String,
    /// MIME type declared by the client for the uploaded file
    #[serde(rename = "type")]
    pub content_type: String,
}
