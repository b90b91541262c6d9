use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Byte-level storage the document store reads from and persists to.
///
/// Implementations must satisfy:
/// - `read` of an absent document fails with [`io::ErrorKind::NotFound`].
/// - `write` fully replaces any prior content at `path`.
/// - Errors are returned as-is; the store classifies them.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Read the whole document at `path`.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the document at `path` with `contents`.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Ensure the directory chain `path` exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
