//! The path error shared by the parser and the tree resolver.

use thiserror::Error;

/// A path expression could not be parsed or could not be followed through a
/// document.
///
/// This is deliberately a single coarse kind: a missing key, an out-of-range
/// index, a container of the wrong type and a malformed expression all
/// surface as the same error with the same message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("Invalid JSON Path")]
pub struct InvalidPathError;

/// Convenience alias for path operations.
pub type Result<T> = std::result::Result<T, InvalidPathError>;
