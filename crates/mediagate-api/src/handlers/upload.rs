use crate::auth::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use mediagate_core::{AppError, UploadResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Single file part named `file`"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "No file, unsupported type, or file too large", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 500, description = "Media provider or server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(subject = %auth.subject))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A request that is not multipart at all carries no file
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Request body is not multipart");
        AppError::NoFileUploaded
    })?;

    let file = extract_multipart_file(multipart, &state.upload.filter).await?;

    let response = UploadService::new(&state).upload(file).await?;

    Ok(Json(response))
}
