//! Error types for set construction and configuration.
//!
//! Absence of an element is never an error: lookups and removals report it
//! through `bool`, `Option` or [`SearchResult`](super::SearchResult).

use std::fmt;

use crate::ordering::OrderingMode;

/// Errors returned by [`BinarySearchSet`](super::BinarySearchSet) operations.
///
/// Every operation that returns a `SetError` leaves the set unchanged.
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::OrderingMode;
/// use binary_search_set::set::SetError;
///
/// let error = SetError::ModeChangeOnNonEmpty {
///     current: OrderingMode::CaseInsensitive,
///     requested: OrderingMode::CaseSensitive,
///     len: 3,
/// };
/// assert_eq!(
///     error.to_string(),
///     "cannot switch a set of 3 elements from case-insensitive to case-sensitive ordering; use reorder instead"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// An argument did not have the shape the operation requires.
    InvalidInput {
        /// The operation that rejected the input.
        operation: &'static str,
        /// What was wrong with the input.
        reason: String,
    },
    /// The ordering mode of a non-empty set cannot change in place, because
    /// existing elements would no longer be sorted under the new mode.
    ModeChangeOnNonEmpty {
        /// The set's current mode.
        current: OrderingMode,
        /// The mode that was requested.
        requested: OrderingMode,
        /// The number of elements in the set.
        len: usize,
    },
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { operation, reason } => {
                write!(formatter, "{operation}: invalid input: {reason}")
            }
            Self::ModeChangeOnNonEmpty {
                current,
                requested,
                len,
            } => write!(
                formatter,
                "cannot switch a set of {len} elements from {current} to {requested} ordering; use reorder instead"
            ),
        }
    }
}

impl std::error::Error for SetError {}
