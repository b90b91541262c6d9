//! File-backed JSON document store.
//!
//! Reads a JSON document, resolves a path expression such as
//! `a.b.c_array[0]` into a value, and writes values back at a path, creating
//! intermediate objects and parent directories as needed.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStorage`] trait:
//!
//! - [`FsStorage`] -- `tokio::fs`, the default
//! - [`InMemoryStorage`] -- `HashMap`-based storage for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every operation re-reads the document; nothing is cached between calls.
//! 2. Path parsing and tree traversal are synchronous and pure; the only
//!    suspension points are storage reads, directory creation and writes.
//! 3. A write persists the whole document, replacing the previous content.
//! 4. Concurrent writers to one file are last-writer-wins. There is no
//!    locking and no merge.
//! 5. Errors short-circuit. Nothing is retried and nothing is rolled back.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> jsondb_store::StoreResult<()> {
//! use serde_json::json;
//!
//! jsondb_store::write_at("data/db.json", "users.alice.age", json!(31)).await?;
//! let age = jsondb_store::load_at("data/db.json", "users.alice.age").await?;
//! assert_eq!(age, json!(31));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod store;
pub mod traits;

pub use config::DbConfig;
pub use error::{StoreError, StoreResult};
pub use fs::FsStorage;
pub use jsondb_path::{InvalidPathError, JsonPath, Segment};
pub use memory::InMemoryStorage;
pub use store::{load_at, write_at, JsonDb};
pub use traits::DocumentStorage;
