//! Binary search with insertion points.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::ordering::{Comparable, OrderingMode};

/// The outcome of searching a sorted slice for an element.
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::OrderingMode;
/// use binary_search_set::set::{SearchResult, binary_search};
///
/// let elements = [10, 20, 30];
/// assert_eq!(
///     binary_search(&elements, &20, OrderingMode::default()),
///     SearchResult::Found(1)
/// );
/// assert_eq!(
///     binary_search(&elements, &25, OrderingMode::default()),
///     SearchResult::InsertionPoint(2)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// An equal element exists at this index.
    Found(usize),
    /// No equal element exists; inserting at this index keeps the slice sorted.
    InsertionPoint(usize),
}

impl SearchResult {
    /// Returns `true` if an equal element was found.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the index carried by either variant.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::InsertionPoint(index) => index,
        }
    }

    /// Returns the index of the equal element, if one was found.
    #[inline]
    #[must_use]
    pub const fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::InsertionPoint(_) => None,
        }
    }

    /// Returns the insertion index, if no equal element was found.
    #[inline]
    #[must_use]
    pub const fn insertion_point(self) -> Option<usize> {
        match self {
            Self::Found(_) => None,
            Self::InsertionPoint(index) => Some(index),
        }
    }
}

impl From<SearchResult> for Result<usize, usize> {
    /// Converts to the `Ok(found)` / `Err(insertion point)` convention of
    /// [`slice::binary_search`].
    #[inline]
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::Found(index) => Ok(index),
            SearchResult::InsertionPoint(index) => Err(index),
        }
    }
}

/// Searches `elements`, sorted and deduplicated under `mode`, for `target`.
///
/// The search keeps a closed window `[low, high]` of candidate indices and
/// probes its floor midpoint. On a miss the final `low` is the position at
/// which `target` would have to be inserted.
///
/// `elements` may hold an owned form of the target, e.g. a `&[String]`
/// searched with a `&str`.
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::OrderingMode;
/// use binary_search_set::set::{SearchResult, binary_search};
///
/// let fruits = vec!["apple".to_string(), "Banana".to_string(), "cherry".to_string()];
///
/// assert_eq!(
///     binary_search(&fruits, "BANANA", OrderingMode::CaseInsensitive),
///     SearchResult::Found(1)
/// );
/// assert_eq!(
///     binary_search(&fruits, "blueberry", OrderingMode::CaseInsensitive),
///     SearchResult::InsertionPoint(2)
/// );
/// ```
pub fn binary_search<T, Q>(elements: &[T], target: &Q, mode: OrderingMode) -> SearchResult
where
    T: Borrow<Q>,
    Q: Comparable + ?Sized,
{
    let mut low = 0;
    // One past the closed upper bound, so an empty window needs no signed index.
    let mut high_exclusive = elements.len();

    while low < high_exclusive {
        let middle = low + (high_exclusive - 1 - low) / 2;
        match mode.compare(target, elements[middle].borrow()) {
            Ordering::Equal => return SearchResult::Found(middle),
            Ordering::Less => high_exclusive = middle,
            Ordering::Greater => low = middle + 1,
        }
    }

    SearchResult::InsertionPoint(low)
}
