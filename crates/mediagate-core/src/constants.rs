//! Defaults shared by configuration and tests.

/// Multipart field that carries the uploaded file.
pub const FILE_FIELD_NAME: &str = "file";

pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 50;

/// Tokens matched against both the file extension and the declared MIME type.
pub const DEFAULT_ALLOWED_FILE_TYPES: &[&str] = &["jpeg", "jpg", "png", "gif", "mp3", "mp4", "pdf"];

/// Logical folder every upload is placed under at the provider.
pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";

pub const DEFAULT_IMAGE_MAX_WIDTH: u32 = 800;
pub const DEFAULT_IMAGE_MAX_HEIGHT: u32 = 800;

pub const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";
