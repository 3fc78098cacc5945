//! Test helpers for Web API tests.
//!
//! Each test gets its own uploads directory and its own application state,
//! so the latest-shared record never leaks between tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use lanshare::config::WebConfig;
use lanshare::web::router::create_router;
use lanshare::{AppState, UploadStorage};
use serde_json::Value;
use tempfile::TempDir;

/// A running test server with its backing state.
pub struct TestContext {
    /// In-process test server.
    pub server: TestServer,
    /// Application state behind the server.
    pub state: Arc<AppState>,
    /// Owns the temporary uploads directory.
    pub dir: TempDir,
}

impl TestContext {
    /// Path of the uploads directory.
    pub fn uploads_dir(&self) -> PathBuf {
        self.dir.path().join("uploads")
    }

    /// Names currently present in the uploads directory.
    pub fn stored_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.uploads_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Create a test configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        cors_origins: vec![],
        serve_static: false,
        static_path: "frontend/dist".to_string(),
    }
}

/// Create a test server with the default 50MB upload limit.
pub fn create_test_server() -> TestContext {
    create_test_server_with_limit(lanshare::file::DEFAULT_MAX_UPLOAD_SIZE)
}

/// Create a test server with a custom upload limit in bytes.
pub fn create_test_server_with_limit(max_upload_size: u64) -> TestContext {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage =
        UploadStorage::new(dir.path().join("uploads")).expect("Failed to create upload storage");

    let state = Arc::new(AppState::new(storage, 5000).with_max_upload_size(max_upload_size));
    let router = create_router(state.clone(), &create_test_config());
    let server = TestServer::new(router).expect("Failed to create test server");

    TestContext { server, state, dir }
}

/// Build a multipart form carrying one file.
pub fn file_form(file_name: &str, content: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(content.to_vec())
            .file_name(file_name.to_string())
            .mime_type("application/octet-stream"),
    )
}

/// Upload a file and return the JSON response body.
pub async fn upload(server: &TestServer, file_name: &str, content: &[u8]) -> Value {
    let response = server.post("/api/upload").multipart(file_form(file_name, content)).await;
    response.assert_status_ok();
    response.json::<Value>()
}
