//! Path expressions for jsondb.
//!
//! A path expression such as `a.b.c_array[0]` locates a value inside a JSON
//! document. This crate turns expressions into ordered [`Segment`]s and owns
//! the single error kind, [`InvalidPathError`], that every path failure in
//! the workspace reports.
//!
//! # Key Types
//!
//! - [`Segment`] -- a key (object field) or an index (array element)
//! - [`JsonPath`] -- an owned segment sequence, parsed via [`parse`] or `FromStr`
//! - [`InvalidPathError`] -- "Invalid JSON Path"

pub mod error;
pub mod parser;
pub mod segment;

pub use error::{InvalidPathError, Result};
pub use parser::parse;
pub use segment::{JsonPath, Segment};
