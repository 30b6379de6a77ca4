//! Error types shared by every collection in the crate.
//!
//! Only caller mistakes are reported through [`CollectionError`]. A missing
//! key is an expected outcome and is reported with `Option` instead, and a
//! broken internal invariant panics.

use thiserror::Error;

/// Errors returned by fallible collection operations.
///
/// # Examples
///
/// ```rust
/// use corral::CollectionError;
/// use corral::linear::ArrayDeque;
///
/// let mut deque: ArrayDeque<i32> = ArrayDeque::new();
/// assert_eq!(
///     deque.remove_front(),
///     Err(CollectionError::EmptyCollection {
///         collection: "ArrayDeque",
///         operation: "remove_front",
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An element was requested from a collection that holds none.
    #[error("cannot {operation} an empty {collection}")]
    EmptyCollection {
        /// The collection type that was empty.
        collection: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A position outside `[0, length)` was addressed.
    #[error("index {index} out of range [0, {length})")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The number of addressable positions.
        length: usize,
    },

    /// A configuration record could not be honoured.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl CollectionError {
    pub(crate) const fn empty(collection: &'static str, operation: &'static str) -> Self {
        Self::EmptyCollection {
            collection,
            operation,
        }
    }
}
