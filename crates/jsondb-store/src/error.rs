use std::io;
use std::path::{Path, PathBuf};

use jsondb_path::InvalidPathError;

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document file does not exist.
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf, source: io::Error },

    /// The document file is not valid JSON.
    #[error("malformed document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The path expression is malformed or does not resolve.
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    /// The updated document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other failure from the storage backend.
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a failed document read. A missing file becomes
    /// [`StoreError::NotFound`], anything else [`StoreError::Io`].
    pub(crate) fn on_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound { path, source }
        } else {
            StoreError::Io { path, source }
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` when the document file was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns `true` for path parse and traversal failures.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, StoreError::InvalidPath(_))
    }

    /// The underlying I/O error kind, if this error came from storage.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            StoreError::NotFound { source, .. } | StoreError::Io { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
