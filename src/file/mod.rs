//! File management module for lanshare.
//!
//! Uploaded files are plain blobs in one directory; the filesystem is the
//! only record of what has been shared.

mod storage;

pub use storage::{PendingUpload, StoredFile, UploadStorage};

/// Default maximum upload size (50MB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;
