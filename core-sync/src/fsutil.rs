//! Small filesystem helpers shared by the sync engine and provisioners.

use crate::error::{Result, SyncError};
use std::path::Path;
use tracing::debug;

/// Create a directory (and parents) if it does not exist.
pub(crate) async fn ensure_directory(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| SyncError::Filesystem {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), "ensured directory");
    Ok(())
}

/// Copy a file, creating the destination directory as needed.
pub(crate) async fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        ensure_directory(parent).await?;
    }
    tokio::fs::copy(source, destination)
        .await
        .map_err(|e| SyncError::Filesystem {
            path: destination.display().to_string(),
            source: e,
        })?;
    debug!(source = %source.display(), destination = %destination.display(), "copied asset");
    Ok(())
}
