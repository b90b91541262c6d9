use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::trace;

use crate::traits::DocumentStorage;

/// Filesystem storage backed by `tokio::fs`.
///
/// Writes go straight to the target file without a rename step, so a crash
/// mid-write can leave a truncated document behind.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentStorage for FsStorage {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let bytes = tokio::fs::read(path).await?;
        trace!(path = %path.display(), len = bytes.len(), "read document");
        Ok(bytes)
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await?;
        trace!(path = %path.display(), len = contents.len(), "wrote document");
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}
