use std::io;
use std::path::{Path, PathBuf};

use crate::media::MediaCategory;

/// Destination directory for a media category under the upload base dir.
pub fn resolve_directory(base_dir: &Path, category: MediaCategory) -> PathBuf {
    base_dir.join(category.subdirectory())
}

/// Create a directory (and parents) if it does not exist.
///
/// Idempotent and safe to race: a concurrent creation of the same path is
/// success, not failure. With `writable = false` this is a no-op — the
/// read-only deployment target never writes to disk, so there is nothing
/// to create.
pub async fn ensure_exists(path: &Path, writable: bool) -> io::Result<()> {
    if !writable {
        return Ok(());
    }

    match tokio::fs::create_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e),
    }
}
