//! File download and listing handlers.

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use super::AppState;
use crate::web::dto::FileEntryResponse;
use crate::web::error::{ApiError, ErrorBody};
use crate::ShareError;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Control characters are dropped, quotes and backslashes replaced in the
/// ASCII fallback, and non-ASCII names are carried in an RFC 5987
/// `filename*` parameter.
fn content_disposition_header(filename: &str) -> String {
    let needs_encoding =
        !filename.is_ascii() || filename.chars().any(|c| c.is_control() || c == '"' || c == '\\');

    if !needs_encoding {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let fallback: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            _ => c,
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

/// GET /api/download/:filename - Download an uploaded file.
#[utoipa::path(
    get,
    path = "/api/download/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Stored filename")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorBody),
        (status = 500, description = "Download failed", body = ErrorBody)
    )
)]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, ApiError> {
    let (file, size) = state.storage.open(&filename).await.map_err(|e| match e {
        ShareError::NotFound(_) => ApiError::not_found("File not found"),
        e => {
            tracing::error!("Download error for {}: {}", filename, e);
            ApiError::internal("Download failed")
        }
    })?;

    tracing::debug!("Streaming {} ({} bytes)", filename, size);

    let content_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(&filename),
        )
        .header(header::CONTENT_LENGTH, size)
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| {
            tracing::error!("Failed to build download response: {}", e);
            ApiError::internal("Download failed")
        })
}

/// GET /api/files - List uploaded files.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    responses(
        (status = 200, description = "Uploaded files", body = Vec<FileEntryResponse>),
        (status = 500, description = "Listing failed", body = ErrorBody)
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileEntryResponse>>, ApiError> {
    let files = state.storage.list().await.map_err(|e| {
        tracing::error!("File listing error: {}", e);
        ApiError::internal("Failed to list files")
    })?;

    Ok(Json(files.into_iter().map(FileEntryResponse::from).collect()))
}
