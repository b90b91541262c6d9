use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::traits::DocumentStorage;

/// In-memory, HashMap-based document storage.
///
/// Intended for tests and embedding. Documents are held as raw bytes keyed by
/// path behind a `RwLock`. Directories are not modelled: `create_dir_all` is
/// a no-op and any path can be written.
pub struct InMemoryStorage {
    documents: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryStorage {
    /// Create a new empty storage.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a document with raw bytes.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.documents
            .write()
            .expect("lock poisoned")
            .insert(path.into(), contents.into());
    }

    /// Raw bytes currently stored at `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.documents
            .read()
            .expect("lock poisoned")
            .get(path.as_ref())
            .cloned()
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }

    /// Remove all documents.
    pub fn clear(&self) {
        self.documents.write().expect("lock poisoned").clear();
    }

    /// Sorted list of stored paths.
    pub fn paths(&self) -> Vec<PathBuf> {
        let map = self.documents.read().expect("lock poisoned");
        let mut paths: Vec<PathBuf> = map.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStorage for InMemoryStorage {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.insert(path, contents);
        Ok(())
    }

    async fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("document_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_and_read() {
        let storage = InMemoryStorage::new();
        storage.write(Path::new("a.json"), b"{}").await.unwrap();
        assert_eq!(storage.read(Path::new("a.json")).await.unwrap(), b"{}");
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn read_missing_is_not_found() {
        let storage = InMemoryStorage::new();
        let err = storage.read(Path::new("missing.json")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn write_replaces_content() {
        let storage = InMemoryStorage::new();
        storage.insert("a.json", "[1,2,3]");
        storage.write(Path::new("a.json"), b"[]").await.unwrap();
        assert_eq!(storage.get("a.json").unwrap(), b"[]");
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn paths_are_sorted() {
        let storage = InMemoryStorage::new();
        storage.insert("b.json", "{}");
        storage.insert("a/c.json", "{}");
        assert_eq!(
            storage.paths(),
            vec![PathBuf::from("a/c.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn clear_and_empty() {
        let storage = InMemoryStorage::default();
        assert!(storage.is_empty());
        storage.insert("x.json", "1");
        assert!(!storage.is_empty());
        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn debug_shows_count() {
        let storage = InMemoryStorage::new();
        storage.insert("x.json", "1");
        assert_eq!(
            format!("{storage:?}"),
            "InMemoryStorage { document_count: 1 }"
        );
    }
}
