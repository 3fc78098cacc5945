//! Concurrency tests for storage naming and the latest-shared record.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use lanshare::file::DEFAULT_MAX_UPLOAD_SIZE;
use lanshare::{LatestShared, SharedText, UploadStorage};
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_concurrent_saves_get_unique_names() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(UploadStorage::new(dir.path().join("uploads")).unwrap());

    let mut handles = Vec::new();
    for i in 0..32 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            let content = format!("payload {i}");
            storage
                .save(content.as_bytes(), "same.txt", DEFAULT_MAX_UPLOAD_SIZE)
                .await
                .unwrap()
        }));
    }

    let mut names = HashSet::new();
    for handle in handles {
        let stored = handle.await.unwrap();
        assert!(stored.filename.ends_with("-same.txt"));
        assert!(names.insert(stored.filename));
    }

    assert_eq!(names.len(), 32);
    assert_eq!(storage.list().await.unwrap().len(), 32);
}

#[tokio::test]
async fn test_concurrent_text_writes_keep_one_complete_value() {
    let latest = Arc::new(LatestShared::new());

    let mut handles = Vec::new();
    for i in 0..16 {
        let latest = latest.clone();
        handles.push(tokio::spawn(async move {
            latest.set_text(SharedText::new(format!("text {i}"))).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = latest.snapshot().await;
    let text = snapshot.text.unwrap().text;
    let written: Vec<String> = (0..16).map(|i| format!("text {i}")).collect();
    assert!(written.contains(&text));
    assert!(snapshot.file.is_none());
}

#[tokio::test]
async fn test_concurrent_uploads_over_http() {
    let ctx = common::create_test_server();

    let (a, b, c) = tokio::join!(
        common::upload(&ctx.server, "doc.txt", b"one"),
        common::upload(&ctx.server, "doc.txt", b"two"),
        common::upload(&ctx.server, "doc.txt", b"three"),
    );

    let names: HashSet<_> = [&a, &b, &c]
        .iter()
        .map(|body| body["filename"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 3);
    assert_eq!(ctx.stored_names().len(), 3);

    let latest: serde_json::Value = ctx.server.get("/api/get-latest").await.json();
    assert!(names.contains(latest["file"]["filename"].as_str().unwrap()));
    assert_eq!(latest["text"], json!(null));
}
