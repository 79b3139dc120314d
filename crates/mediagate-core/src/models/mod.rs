//! Upload domain models.
//!
//! Everything here is request-scoped: nothing is persisted by this service, the
//! provider is the system of record for stored files.

mod upload;

pub use upload::{
    CropMode, MediaCategory, ResourceType, Transformation, UploadOptions, UploadResponse,
    UploadResult, UploadedFile,
};
