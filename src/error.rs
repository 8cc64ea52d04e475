//! Error type shared by every sortscope operation.

use thiserror::Error;

/// Errors reported by sorting, dataset and harness operations.
///
/// None of these are recovered from inside the crate: they surface to the
/// immediate caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A non-trivial window (`left < right`) reaches past the end of the slice.
    #[error("window [{left}, {right}] is out of bounds for a sequence of length {len}")]
    WindowOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },

    /// Radix sort found a value without a non-negative digit key.
    #[error("radix sort requires non-negative keys, found a negative value at index {index}")]
    NegativeKey { index: usize },

    #[error("unknown algorithm `{0}` (expected one of quick, heap, merge, shell, radix)")]
    UnknownAlgorithm(String),

    #[error("unknown dataset shape `{0}` (expected one of random, reverse, partiallySorted)")]
    UnknownShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
