//! Upload and text sharing handlers.

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::file::StoredFile;
use crate::share::{LatestSnapshot, SharedFile, SharedText};
use crate::web::dto::{NO_TEXT, SendTextRequest, TextShareResponse, UploadResponse};
use crate::web::error::{ApiError, ErrorBody};
use crate::ShareError;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

fn too_large(limit: u64) -> ApiError {
    ApiError::from(ShareError::FileTooLarge { limit })
}

fn multipart_error(e: MultipartError, limit: u64) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(limit);
    }
    tracing::warn!("Failed to read multipart data: {}", e);
    ApiError::bad_request("Invalid multipart data")
}

fn storage_error(e: ShareError) -> ApiError {
    match e {
        ShareError::FileTooLarge { limit } => too_large(limit),
        e => {
            tracing::error!("Upload error: {}", e);
            ApiError::internal("Upload failed")
        }
    }
}

/// Stream one multipart field to a fresh file in the uploads directory.
///
/// Any early return drops the pending upload, which removes the partial file.
async fn receive_upload(
    state: &AppState,
    field: &mut Field<'_>,
    original_name: &str,
) -> Result<StoredFile, ApiError> {
    let limit = state.max_upload_size;
    let mut upload = state
        .storage
        .begin_upload(original_name, limit)
        .await
        .map_err(storage_error)?;

    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, limit))? {
        upload.write_chunk(&chunk).await.map_err(storage_error)?;
    }

    upload.finish().await.map_err(storage_error)
}

/// POST /api/upload - Upload a file.
///
/// Request body: multipart/form-data with a `file` field.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "share",
    responses(
        (status = 200, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "No file uploaded", body = ErrorBody),
        (status = 413, description = "File too large", body = ErrorBody),
        (status = 500, description = "Upload failed", body = ErrorBody)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let limit = state.max_upload_size;
    let mut received: Option<(StoredFile, String)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if received.is_some() || field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let stored = receive_upload(&state, &mut field, &original_name).await?;
        received = Some((stored, original_name));
    }

    let (stored, original_name) =
        received.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    tracing::info!(
        filename = %stored.filename,
        size = stored.size,
        "File uploaded"
    );

    state
        .latest
        .set_file(SharedFile::new(&stored.filename, &original_name, stored.size))
        .await;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename: stored.filename,
        original_name,
        size: stored.size,
    }))
}

/// POST /api/send-text - Share a text snippet.
#[utoipa::path(
    post,
    path = "/api/send-text",
    tag = "share",
    request_body = SendTextRequest,
    responses(
        (status = 200, description = "Text shared", body = TextShareResponse),
        (status = 400, description = "No text provided", body = ErrorBody)
    )
)]
pub async fn send_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendTextRequest>, JsonRejection>,
) -> Result<Json<TextShareResponse>, ApiError> {
    let text = match payload {
        Ok(Json(req)) => req.into_text(),
        Err(e) => {
            tracing::debug!("Rejected text payload: {}", e);
            Err(ShareError::Validation(NO_TEXT.to_string()))
        }
    }?;

    state.latest.set_text(SharedText::new(text.clone())).await;

    Ok(Json(TextShareResponse {
        message: "Text shared successfully".to_string(),
        text,
    }))
}

/// GET /api/get-latest - Latest shared file and text.
#[utoipa::path(
    get,
    path = "/api/get-latest",
    tag = "share",
    responses(
        (status = 200, description = "Latest shared items", body = LatestSnapshot)
    )
)]
pub async fn get_latest(State(state): State<Arc<AppState>>) -> Json<LatestSnapshot> {
    Json(state.latest.snapshot().await)
}
