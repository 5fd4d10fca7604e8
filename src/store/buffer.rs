use async_trait::async_trait;
use bytes::Bytes;

use super::{public_url, MediaStore, Persistence, StoreError, StoredFile};
use crate::media::{unique_filename, ClassifiedFile, FileContent};

/// Passthrough backend for read-only filesystems: never writes, returns the
/// record with its bytes retained for an external uploader. Skipped
/// persistence is a signaled partial result, not an error.
#[derive(Default)]
pub struct BufferStore;

impl BufferStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaStore for BufferStore {
    async fn store(&self, file: ClassifiedFile) -> Result<StoredFile, StoreError> {
        let ClassifiedFile { file, category } = file;

        // The URL is computed for shape consistency even though nothing
        // exists at it yet.
        let filename = unique_filename(&file.original_name);

        let bytes = match file.content {
            FileContent::Buffer(bytes) => bytes,
            FileContent::Staged(temp_path) => Bytes::from(tokio::fs::read(&temp_path).await?),
        };

        tracing::debug!(
            filename = %filename,
            category = ?category,
            size = file.size,
            "Persistence deferred; retaining upload in memory"
        );

        Ok(StoredFile {
            original_name: file.original_name,
            url: public_url(category, &filename),
            filename,
            category,
            size: file.size,
            mime_type: file.mime_type,
            persistence: Persistence::Deferred(bytes),
        })
    }
}
