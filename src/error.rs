//! Error types for collection operations.

use thiserror::Error;

/// Errors raised by positional mutations on a [`Collection`](crate::Collection).
///
/// Absence (a missing item, a failed predicate search) is never an error; those
/// operations return `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A single index was outside `0..len`.
    #[error("index {index} is out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `start..start + count` span did not fit inside `0..len`.
    #[error("range starting at {start} with count {count} is out of bounds for collection of length {len}")]
    RangeOutOfBounds {
        start: usize,
        count: usize,
        len: usize,
    },
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
