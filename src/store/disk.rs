use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{
    ensure_exists, public_url, resolve_directory, MediaStore, Persistence, StoreError, StoredFile,
};
use crate::media::{unique_filename, ClassifiedFile, FileContent};

/// Stores uploads under `<base>/<category-subdir>/<unique-name>` on the
/// local filesystem.
pub struct DiskStore {
    base_dir: PathBuf,
}

impl DiskStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, std::io::Error> {
        let base_dir = std::path::absolute(base_dir)?;
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Move a staged temp file into place, falling back to copy + remove when
/// rename fails (e.g. across filesystems).
async fn place_staged(src: &Path, dest: &Path) -> Result<(), std::io::Error> {
    if tokio::fs::rename(src, dest).await.is_ok() {
        return Ok(());
    }
    tokio::fs::copy(src, dest).await?;
    tokio::fs::remove_file(src).await
}

#[async_trait]
impl MediaStore for DiskStore {
    async fn store(&self, file: ClassifiedFile) -> Result<StoredFile, StoreError> {
        let ClassifiedFile { file, category } = file;

        let filename = unique_filename(&file.original_name);
        let dir = resolve_directory(&self.base_dir, category);
        ensure_exists(&dir, true).await?;
        let dest = dir.join(&filename);

        match &file.content {
            FileContent::Buffer(bytes) => tokio::fs::write(&dest, bytes).await?,
            FileContent::Staged(temp_path) => place_staged(temp_path, &dest).await?,
        }

        tracing::debug!(
            filename = %filename,
            category = ?category,
            size = file.size,
            "Stored file on disk"
        );

        Ok(StoredFile {
            original_name: file.original_name,
            url: public_url(category, &filename),
            filename,
            category,
            size: file.size,
            mime_type: file.mime_type,
            persistence: Persistence::Disk(dest),
        })
    }
}
