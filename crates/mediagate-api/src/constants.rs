//! Route constants.

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api";

/// Path of the upload endpoint, relative to [`API_PREFIX`].
pub const UPLOAD_PATH: &str = "/upload";

