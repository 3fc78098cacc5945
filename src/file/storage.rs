//! Upload storage for lanshare.
//!
//! Uploaded blobs live flat in a single directory under a generated name:
//! ```text
//! {base_path}/
//! ├── 1760779800123-report.pdf
//! ├── 1760779801456-holiday_photo.jpg
//! └── ...
//! ```
//! The name is the upload timestamp in milliseconds followed by the
//! sanitized original filename.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{Result, ShareError};

/// Upper bound on name reservations when timestamps collide.
const MAX_RESERVE_ATTEMPTS: u32 = 1000;

/// A file present in the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name on disk.
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Storage service for uploaded files.
#[derive(Debug, Clone)]
pub struct UploadStorage {
    /// Directory uploaded files are written to.
    base_path: PathBuf,
}

impl UploadStorage {
    /// Create a new UploadStorage with the given base path.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Replace every character outside `[A-Za-z0-9.-]` with `_`.
    pub fn sanitize_filename(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Build the stored name for an upload received at `timestamp_ms`.
    pub fn stored_name(timestamp_ms: i64, original_name: &str) -> String {
        format!("{}-{}", timestamp_ms, Self::sanitize_filename(original_name))
    }

    /// Reserve a fresh file for an incoming upload.
    ///
    /// The file is created with create-new semantics. When the generated name
    /// is already taken the timestamp is advanced by one millisecond and the
    /// reservation retried, so an existing upload is never overwritten.
    pub async fn begin_upload(&self, original_name: &str, limit: u64) -> Result<PendingUpload> {
        let mut timestamp = Utc::now().timestamp_millis();

        for _ in 0..MAX_RESERVE_ATTEMPTS {
            let stored_name = Self::stored_name(timestamp, original_name);
            let path = self.base_path.join(&stored_name);

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    return Ok(PendingUpload {
                        stored_name,
                        path,
                        file,
                        written: 0,
                        limit,
                        committed: false,
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!("Stored name {} taken, advancing timestamp", stored_name);
                    timestamp += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ShareError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "could not reserve a unique upload name",
        )))
    }

    /// Store a complete payload in one call.
    pub async fn save(&self, content: &[u8], original_name: &str, limit: u64) -> Result<StoredFile> {
        let mut upload = self.begin_upload(original_name, limit).await?;
        upload.write_chunk(content).await?;
        upload.finish().await
    }

    /// Map a stored filename to its path inside the uploads directory.
    ///
    /// Returns `None` for names that could escape the directory.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\', '\0']);

        if invalid {
            None
        } else {
            Some(self.base_path.join(filename))
        }
    }

    /// Open a stored file for reading.
    ///
    /// Returns the open handle together with the file size.
    pub async fn open(&self, filename: &str) -> Result<(fs::File, u64)> {
        let not_found = || ShareError::NotFound(format!("File: {filename}"));

        let path = self.resolve(filename).ok_or_else(not_found)?;

        let metadata = match fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(not_found());
        }

        let file = fs::File::open(&path).await?;
        Ok((file, metadata.len()))
    }

    /// List every entry of the uploads directory, sorted by filename.
    ///
    /// Stored names start with the upload timestamp, so this is also
    /// upload order for files written by this server.
    pub async fn list(&self) -> Result<Vec<StoredFile>> {
        let mut entries = fs::read_dir(&self.base_path).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            files.push(StoredFile {
                filename: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified: metadata.modified()?,
            });
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }
}

/// An upload being streamed to disk.
///
/// Until [`PendingUpload::finish`] succeeds the file is partial, and dropping
/// the upload removes it. This also covers a handler future dropped mid-body.
#[derive(Debug)]
pub struct PendingUpload {
    stored_name: String,
    path: PathBuf,
    file: fs::File,
    written: u64,
    limit: u64,
    committed: bool,
}

impl PendingUpload {
    /// Name the upload is stored under.
    pub fn stored_name(&self) -> &str {
        &self.stored_name
    }

    /// Append a chunk, failing once the running size would exceed the limit.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let next = self.written + chunk.len() as u64;
        if next > self.limit {
            return Err(ShareError::FileTooLarge { limit: self.limit });
        }

        self.file.write_all(chunk).await?;
        self.written = next;
        Ok(())
    }

    /// Flush the upload and return its stored metadata.
    pub async fn finish(mut self) -> Result<StoredFile> {
        self.file.flush().await?;
        let metadata = self.file.metadata().await?;
        let modified = metadata.modified()?;

        self.committed = true;
        Ok(StoredFile {
            filename: std::mem::take(&mut self.stored_name),
            size: self.written,
            modified,
        })
    }
}

impl Drop for PendingUpload {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Removed partial upload {}", self.stored_name),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to remove partial upload {}: {}", self.stored_name, e)
            }
        }
    }
}
