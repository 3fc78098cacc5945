//! Latest-shared record for lanshare.
//!
//! Holds the most recently uploaded file and the most recently shared text.
//! The two slots are independent: sharing a file never clears the text and
//! vice versa. The record lives only as long as the process.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use utoipa::ToSchema;

use crate::datetime::now_iso8601;

/// Summary of the most recently uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedFile {
    /// Name on disk.
    pub filename: String,
    /// Filename as sent by the client.
    pub original_name: String,
    /// Size in bytes.
    pub size: u64,
    /// Upload time (ISO-8601).
    pub uploaded_at: String,
}

impl SharedFile {
    /// Create a file summary stamped with the current time.
    pub fn new(filename: impl Into<String>, original_name: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            original_name: original_name.into(),
            size,
            uploaded_at: now_iso8601(),
        }
    }
}

/// The most recently shared text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedText {
    /// Shared text.
    pub text: String,
    /// Share time (ISO-8601).
    pub shared_at: String,
}

impl SharedText {
    /// Create a text record stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shared_at: now_iso8601(),
        }
    }
}

/// Point-in-time copy of the latest-shared record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct LatestSnapshot {
    /// Latest uploaded file, if any.
    pub file: Option<SharedFile>,
    /// Latest shared text, if any.
    pub text: Option<SharedText>,
}

/// Process-wide latest-shared record.
///
/// Writers replace one slot at a time; readers always get a consistent
/// snapshot. Concurrent writers are last-write-wins.
#[derive(Debug, Default)]
pub struct LatestShared {
    inner: RwLock<LatestSnapshot>,
}

impl LatestShared {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest file.
    pub async fn set_file(&self, file: SharedFile) {
        debug!("Latest file is now {}", file.filename);
        self.inner.write().await.file = Some(file);
    }

    /// Replace the latest text.
    pub async fn set_text(&self, text: SharedText) {
        debug!("Latest text updated ({} bytes)", text.text.len());
        self.inner.write().await.text = Some(text);
    }

    /// Copy of the current record.
    pub async fn snapshot(&self) -> LatestSnapshot {
        self.inner.read().await.clone()
    }

    /// Forget both slots.
    pub async fn clear(&self) {
        *self.inner.write().await = LatestSnapshot::default();
    }
}
