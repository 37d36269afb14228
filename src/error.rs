//! Error types for sorting operations.

use thiserror::Error;

/// Result type alias for sorting operations
pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Raised when elements of a sequence cannot be ordered relative to each other.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// An element does not even compare equal to itself (e.g. `NaN`)
    #[error("element at index {index} cannot be ordered: {value}")]
    Unorderable {
        /// Position of the element in the input
        index: usize,
        /// Debug rendering of the element
        value: String,
    },

    /// Two elements produced no ordering when compared
    #[error("cannot compare {left} with {right}")]
    Incomparable {
        /// Debug rendering of the left operand
        left: String,
        /// Debug rendering of the right operand
        right: String,
    },
}
