use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DbConfig;
use crate::error::{StoreError, StoreResult};
use crate::fs::FsStorage;
use crate::traits::DocumentStorage;

/// Document store: binds a [`DocumentStorage`] backend to the path parser and
/// the tree resolver.
///
/// The store holds no document state. Every call reads the file afresh, works
/// on its own private tree, and (for writes) persists the whole document.
/// Concurrent writes to one file race: the last one to persist wins and the
/// others are lost.
#[derive(Debug, Default)]
pub struct JsonDb<S = FsStorage> {
    storage: S,
    config: DbConfig,
}

impl JsonDb<FsStorage> {
    /// A filesystem-backed store with default configuration.
    pub fn new() -> Self {
        Self::with_storage(FsStorage)
    }
}

impl<S: DocumentStorage> JsonDb<S> {
    /// A store over the given backend with default configuration.
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            config: DbConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DbConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the whole document.
    pub async fn load(&self, file: impl AsRef<Path>) -> StoreResult<Value> {
        self.load_at(file, "").await
    }

    /// Load the value at `expression` inside the document at `file`.
    ///
    /// The empty expression returns the whole document.
    pub async fn load_at(&self, file: impl AsRef<Path>, expression: &str) -> StoreResult<Value> {
        let file = file.as_ref();
        debug!(file = %file.display(), expression, "load");

        let mut root = self.read_document(file).await?;
        let path = jsondb_path::parse(expression)?;
        let found = jsondb_tree::read_mut(&mut root, path.segments())?;
        Ok(std::mem::take(found))
    }

    /// Returns `true` if `expression` resolves inside the document at `file`.
    ///
    /// A missing file or malformed document is still an error.
    pub async fn exists_at(&self, file: impl AsRef<Path>, expression: &str) -> StoreResult<bool> {
        let root = self.read_document(file.as_ref()).await?;
        let path = jsondb_path::parse(expression)?;
        Ok(jsondb_tree::read(&root, path.segments()).is_ok())
    }

    /// Store `value` at `expression` inside the document at `file`.
    ///
    /// A missing file is treated as `{}`, missing intermediate objects are
    /// created, and the full document is written back.
    pub async fn write_at(
        &self,
        file: impl AsRef<Path>,
        expression: &str,
        value: Value,
    ) -> StoreResult<()> {
        let file = file.as_ref();
        debug!(file = %file.display(), expression, "write");

        let root = match self.read_document(file).await {
            Ok(root) => root,
            Err(err) if err.is_not_found() => {
                debug!(file = %file.display(), "no existing document; starting from {{}}");
                Value::Object(Map::new())
            }
            Err(err) => return Err(err),
        };

        let path = jsondb_path::parse(expression)?;
        let root = jsondb_tree::write(root, path.segments(), value)?;
        let bytes = self.config.encode(&root)?;

        if self.config.create_dirs {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.storage
                    .create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::io(parent, source))?;
            }
        }

        self.storage
            .write(file, &bytes)
            .await
            .map_err(|source| StoreError::io(file, source))?;

        debug!(file = %file.display(), len = bytes.len(), "document persisted");
        Ok(())
    }

    async fn read_document(&self, file: &Path) -> StoreResult<Value> {
        let bytes = self
            .storage
            .read(file)
            .await
            .map_err(|source| StoreError::on_read(file, source))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: file.to_path_buf(),
            source,
        })
    }
}

/// Load the value at `expression` from a JSON file on disk.
pub async fn load_at(file: impl AsRef<Path>, expression: &str) -> StoreResult<Value> {
    JsonDb::new().load_at(file, expression).await
}

/// Write `value` at `expression` into a JSON file on disk.
pub async fn write_at(file: impl AsRef<Path>, expression: &str, value: Value) -> StoreResult<()> {
    JsonDb::new().write_at(file, expression, value).await
}
