//! The error type shared by every fallible operation in this crate.

use std::io;

/// Errors surfaced by searching, mutating, or traversing a tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A key could not be ordered against a key stored in the tree, e.g. a `NaN` float.
    #[error("key has no ordering relative to the keys stored in the tree")]
    InvalidArgument,
    /// Writing a traversal emission to its output failed.
    #[error("failed to emit traversal output")]
    Emit(#[from] io::Error),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
