//! API handlers for lanshare.

pub mod file;
pub mod network;
pub mod share;

pub use file::*;
pub use network::*;
pub use share::*;

use crate::file::{UploadStorage, DEFAULT_MAX_UPLOAD_SIZE};
use crate::share::LatestShared;

/// Application state shared across handlers.
///
/// Owns the latest-shared record, so each router (and each test) gets its
/// own independent copy.
pub struct AppState {
    /// Uploads directory.
    pub storage: UploadStorage,
    /// Most recently shared file and text.
    pub latest: LatestShared,
    /// Maximum upload size in bytes.
    pub max_upload_size: u64,
    /// Port the server listens on, reported by network-info.
    pub port: u16,
}

impl AppState {
    /// Create a new application state.
    pub fn new(storage: UploadStorage, port: u16) -> Self {
        Self {
            storage,
            latest: LatestShared::new(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            port,
        }
    }

    /// Set the maximum upload size in bytes.
    pub fn with_max_upload_size(mut self, bytes: u64) -> Self {
        self.max_upload_size = bytes;
        self
    }
}
