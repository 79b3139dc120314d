//! Upload filter
//!
//! Accepts a file only when both its extension and its declared MIME type contain one
//! of the configured type tokens (`jpeg`, `jpg`, `png`, ...). The extension is compared
//! case-insensitively, the MIME type as declared by the client.
//!
//! This is a client-declared check only: nothing here inspects the file content.

use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFilterError {
    #[error("File exceeds {max} bytes")]
    FileTooLarge { max: usize },

    #[error("File type not supported: {filename} ({content_type})")]
    UnsupportedType {
        filename: String,
        content_type: String,
    },
}

impl UploadFilterError {
    pub const FILE_TOO_LARGE: &'static str = "File too large";
}

/// Type and size filter applied to every multipart file part.
#[derive(Debug, Clone)]
pub struct UploadFilter {
    max_file_size: usize,
    allowed_types: Vec<String>,
}

impl UploadFilter {
    pub fn new(max_file_size: usize, allowed_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_types: allowed_types
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    fn matches_token(&self, candidate: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|token| candidate.contains(token.as_str()))
    }

    /// Lowercased extension including the leading dot, or an empty string.
    fn extension_of(filename: &str) -> String {
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default()
    }

    /// Check extension AND declared MIME type. Runs on the part headers, before any
    /// file bytes are read.
    pub fn check_type(&self, filename: &str, content_type: &str) -> Result<(), UploadFilterError> {
        let extension_ok = self.matches_token(&Self::extension_of(filename));
        let mime_ok = self.matches_token(content_type);

        if extension_ok && mime_ok {
            Ok(())
        } else {
            tracing::debug!(
                filename = %filename,
                content_type = %content_type,
                extension_ok,
                mime_ok,
                "Upload rejected by type filter"
            );
            Err(UploadFilterError::UnsupportedType {
                filename: filename.to_string(),
                content_type: content_type.to_string(),
            })
        }
    }

    /// Check the running byte count of a file being buffered.
    pub fn check_size(&self, size: usize) -> Result<(), UploadFilterError> {
        if size > self.max_file_size {
            return Err(UploadFilterError::FileTooLarge {
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ALLOWED_FILE_TYPES;

    fn default_filter() -> UploadFilter {
        UploadFilter::new(
            50 * 1024 * 1024,
            DEFAULT_ALLOWED_FILE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn accepts_matching_extension_and_mime() {
        let filter = default_filter();
        assert!(filter.check_type("photo.jpg", "image/jpeg").is_ok());
        assert!(filter.check_type("diagram.png", "image/png").is_ok());
        assert!(filter.check_type("clip.mp4", "video/mp4").is_ok());
        assert!(filter.check_type("paper.pdf", "application/pdf").is_ok());
        assert!(filter.check_type("loop.gif", "image/gif").is_ok());
    }

    #[test]
    fn extension_is_case_insensitive() {
        let filter = default_filter();
        assert!(filter.check_type("PHOTO.JPG", "image/jpeg").is_ok());
        assert!(filter.check_type("Scan.PdF", "application/pdf").is_ok());
    }

    #[test]
    fn rejects_spoofed_extension_with_generic_mime() {
        let filter = default_filter();
        let err = filter
            .check_type("script.jpg", "application/octet-stream")
            .unwrap_err();
        assert_eq!(
            err,
            UploadFilterError::UnsupportedType {
                filename: "script.jpg".to_string(),
                content_type: "application/octet-stream".to_string(),
            }
        );
    }

    #[test]
    fn rejects_allowed_mime_with_wrong_extension() {
        let filter = default_filter();
        assert!(filter.check_type("payload.exe", "image/png").is_err());
        assert!(filter.check_type("no_extension", "image/png").is_err());
    }

    #[test]
    fn mime_is_matched_by_token_containment() {
        let filter = default_filter();
        // "audio/mpeg" contains none of the tokens; only "audio/mp3" does.
        assert!(filter.check_type("song.mp3", "audio/mp3").is_ok());
        assert!(filter.check_type("song.mp3", "audio/mpeg").is_err());
    }

    #[test]
    fn size_limit_is_inclusive() {
        let filter = UploadFilter::new(10, vec!["png".to_string()]);
        assert!(filter.check_size(10).is_ok());
        assert_eq!(
            filter.check_size(11),
            Err(UploadFilterError::FileTooLarge { max: 10 })
        );
    }

    #[test]
    fn tokens_are_normalized() {
        let filter = UploadFilter::new(1, vec![" PNG ".to_string(), String::new()]);
        assert_eq!(filter.allowed_types(), &["png".to_string()]);
    }
}
