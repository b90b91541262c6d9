use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// How documents are persisted.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// pretty = true
/// trailing_newline = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Pretty-print persisted JSON.
    pub pretty: bool,
    /// Create missing parent directories before writing.
    pub create_dirs: bool,
    /// Terminate persisted documents with `\n`.
    pub trailing_newline: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            create_dirs: true,
            trailing_newline: false,
        }
    }
}

impl DbConfig {
    /// Parse a TOML configuration.
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        toml::from_str(s).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Encode a document the way this configuration persists it.
    pub fn encode(&self, document: &Value) -> StoreResult<Vec<u8>> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        }
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if self.trailing_newline {
            bytes.push(b'\n');
        }
        Ok(bytes)
    }
}
