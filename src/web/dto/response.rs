//! Response DTOs for Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::datetime::system_time_to_iso8601;
use crate::file::StoredFile;
use crate::network::NetworkAddress;

/// File upload response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Status message.
    pub message: String,
    /// Name the file was stored under.
    pub filename: String,
    /// Filename as sent by the client.
    pub original_name: String,
    /// Size in bytes.
    pub size: u64,
}

/// Text share response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TextShareResponse {
    /// Status message.
    pub message: String,
    /// The stored text.
    pub text: String,
}

/// Entry of the uploaded files listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileEntryResponse {
    /// Name on disk.
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time (ISO-8601).
    pub uploaded_at: String,
}

impl From<StoredFile> for FileEntryResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            filename: file.filename,
            size: file.size,
            uploaded_at: system_time_to_iso8601(file.modified),
        }
    }
}

/// Network information response.
#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkInfoResponse {
    /// Local hostname.
    pub hostname: String,
    /// LAN-reachable IPv4 addresses.
    pub addresses: Vec<NetworkAddress>,
    /// Listening port.
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_upload_response_camel_case() {
        let response = UploadResponse {
            message: "File uploaded successfully".to_string(),
            filename: "1-a.txt".to_string(),
            original_name: "a.txt".to_string(),
            size: 3,
        };
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["originalName"], "a.txt");
        assert!(value.get("original_name").is_none());
    }

    #[test]
    fn test_file_entry_from_stored_file() {
        let entry = FileEntryResponse::from(StoredFile {
            filename: "1-a.txt".to_string(),
            size: 42,
            modified: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        });
        let value = serde_json::to_value(entry).unwrap();

        assert_eq!(value["filename"], "1-a.txt");
        assert_eq!(value["size"], 42);
        assert_eq!(value["uploadedAt"], "2023-11-14T22:13:20.000Z");
    }
}
