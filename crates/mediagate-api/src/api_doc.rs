//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediagate_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediagate API",
        version = "0.1.0",
        description = "Validated upload proxy. Files posted to /api/upload are checked against the configured type and size filter and forwarded to the media provider; the response carries the provider-hosted URL."
    ),
    paths(
        handlers::upload::upload_file,
        handlers::health::health_check,
    ),
    components(
        schemas(
            models::UploadResponse,
            error::ErrorResponse,
            handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "upload", description = "File upload to the media provider (Bearer token required)"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_upload_path() {
        let spec = get_openapi_spec();
        assert!(spec.paths.paths.contains_key("/api/upload"));
        assert!(spec.paths.paths.contains_key("/health"));
    }
}
