//! Router configuration for Web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::error::ApiError;
use super::handlers::{
    download_file, get_latest, list_files, network_info, send_text, upload_file, AppState,
};
use super::middleware::{create_catch_panic_layer, create_cors_layer};
use super::openapi::ApiDoc;
use crate::config::WebConfig;

/// Headroom for multipart boundaries and part headers on top of the file limit.
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    let upload_body_limit = (app_state.max_upload_size + MULTIPART_OVERHEAD) as usize;

    let api_routes = Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/send-text", post(send_text))
        .route("/get-latest", get(get_latest))
        .route("/download/:filename", get(download_file))
        .route("/files", get(list_files))
        .route("/network-info", get(network_info));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
        .merge(create_health_router())
        .merge(create_swagger_router());

    let static_router = if web_config.serve_static {
        create_static_router(&web_config.static_path)
    } else {
        None
    };

    router = match static_router {
        Some(static_router) => router.merge(static_router),
        None => router.fallback(not_found),
    };

    router.layer(
        ServiceBuilder::new()
            .layer(create_catch_panic_layer())
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&web_config.cors_origins)),
    )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Create a router serving the frontend bundle.
///
/// Unknown paths get `index.html` so client-side routes resolve. Returns
/// `None` when the bundle has no `index.html`.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    let root = Path::new(static_path);
    let index = root.join("index.html");

    if !index.is_file() {
        tracing::warn!(
            "Frontend bundle not found at {}, static serving disabled",
            root.display()
        );
        return None;
    }

    tracing::info!("Serving frontend from {}", root.display());
    let serve_dir = ServeDir::new(root).fallback(ServeFile::new(index));
    Some(Router::new().fallback_service(serve_dir))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback when no frontend bundle is mounted.
async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
