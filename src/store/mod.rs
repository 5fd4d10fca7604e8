mod buffer;
mod disk;
mod paths;

pub use buffer::BufferStore;
pub use disk::DiskStore;
pub use paths::{ensure_exists, resolve_directory};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::media::{ClassifiedFile, MediaCategory};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the bytes of a stored file ended up.
#[derive(Debug, Clone)]
pub enum Persistence {
    /// Written to the local filesystem at this absolute path.
    Disk(PathBuf),
    /// Persistence deliberately skipped (read-only environment); the raw
    /// bytes are retained so an external uploader can finish the job.
    Deferred(Bytes),
}

/// Result of a completed store operation. Lives only for the duration of
/// the response; nothing here is persisted beyond the filesystem itself.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub original_name: String,
    /// Unique stored filename (timestamp + random token)
    pub filename: String,
    pub category: MediaCategory,
    pub size: u64,
    pub mime_type: String,
    /// Public path of the form `/uploads/<subdir>/<filename>`. Always
    /// relative; the host is attached at response assembly.
    pub url: String,
    pub persistence: Persistence,
}

impl StoredFile {
    pub fn path(&self) -> Option<&Path> {
        match &self.persistence {
            Persistence::Disk(path) => Some(path),
            Persistence::Deferred(_) => None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.persistence, Persistence::Disk(_))
    }
}

/// Public URL for a stored filename, relative to the service root.
pub fn public_url(category: MediaCategory, filename: &str) -> String {
    format!("/uploads/{}/{filename}", category.subdirectory())
}

/// Abstraction over upload persistence backends.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist a validated file and return its record. Implementations must
    /// only receive files that already passed [`crate::media::validate`].
    async fn store(&self, file: ClassifiedFile) -> Result<StoredFile, StoreError>;

    /// Store a batch in input order, failing fast: the first per-file
    /// failure aborts the remainder and no partial list is returned.
    async fn store_all(&self, files: Vec<ClassifiedFile>) -> Result<Vec<StoredFile>, StoreError> {
        let mut records = Vec::with_capacity(files.len());
        for file in files {
            records.push(self.store(file).await?);
        }
        Ok(records)
    }
}
