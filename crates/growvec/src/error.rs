//! Error types for `growvec`.
//!
//! Only contract violations on the checked surface produce errors: checked
//! element access and positional insert/remove with a bad index. Allocation
//! failure is fatal and routed through `std::alloc::handle_alloc_error`
//! rather than surfaced here, and a `Layout` that would overflow `isize`
//! panics with a capacity-overflow message.

use std::fmt;

/// Errors produced by the checked operations of [`GrowVec`](crate::GrowVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Checked access or removal at an index with no live element.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// Insertion past the one-past-the-end position.
    InsertOutOfBounds {
        /// The requested insertion index.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Error::InsertOutOfBounds { index, len } => {
                write!(f, "insertion index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for `growvec` operations.
pub type Result<T> = std::result::Result<T, Error>;
