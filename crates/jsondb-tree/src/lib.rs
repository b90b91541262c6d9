//! Path resolution and mutation over `serde_json::Value` trees.
//!
//! Both directions take already-parsed [`Segment`]s and are pure: no I/O,
//! no shared state. Every failure is the coarse [`InvalidPathError`].
//!
//! # Traversal Rules
//!
//! 1. A key segment only descends into an object; an index segment only
//!    descends into an array, and only to an existing element.
//! 2. Reads never create anything.
//! 3. Writes create missing intermediate objects for key segments, never
//!    array elements, and never replace an existing value that is in the way.
//! 4. The empty path addresses the whole document.

pub mod read;
pub mod write;

pub use jsondb_path::{InvalidPathError, JsonPath, Result, Segment};
pub use read::{read, read_mut};
pub use write::{assign, descend_creating, write};
