//! Sorted set backed by a contiguous sequence.
//!
//! This module provides [`BinarySearchSet`], a set that keeps its elements
//! in a single sorted, duplicate-free sequence and locates them by binary
//! search.
//!
//! # Overview
//!
//! - Elements are ordered by their [`Comparable`] implementation under the
//!   set's [`OrderingMode`] (case-insensitive by default).
//! - At most one representative of each equivalence class is stored: in a
//!   case-insensitive set of strings, `"apple"` and `"APPLE"` are the same
//!   member, and whichever was added first is kept.
//! - Up to 8 elements are stored inline; larger sets spill to the heap.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                  |
//! |----------------|-----------------------------|
//! | `add`          | O(log n) + O(n) shift       |
//! | `remove`       | O(log n) + O(n) shift       |
//! | `contains`     | O(log n)                    |
//! | `len`          | O(1)                        |
//! | `is_empty`     | O(1)                        |
//! | `union`        | O(m + n log(m + n) + n·m)   |
//! | `intersection` | O(n · lookup in other)      |
//! | `difference`   | O(n · lookup in other)      |
//! | `has_subset`   | O(m log n)                  |
//! | `iter`         | O(1) + O(n)                 |
//!
//! # Examples
//!
//! ```rust
//! use binary_search_set::set::BinarySearchSet;
//!
//! let mut set = BinarySearchSet::new();
//! assert!(set.add(5));
//! assert!(set.add(3));
//! assert!(set.add(8));
//! assert!(!set.add(5));
//!
//! assert_eq!(set.as_slice(), &[3, 5, 8]);
//! assert!(set.contains(&3));
//!
//! assert!(set.remove(&3));
//! assert!(!set.remove(&3));
//! assert_eq!(set.len(), 2);
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;

use super::cursor::{Cursor, IntoIter, Iter};
use super::error::SetError;
use super::search::{SearchResult, binary_search};
use super::SortedSet;
use crate::ordering::{Comparable, OrderingMode};

/// The number of elements stored inline before the backing sequence spills
/// to the heap.
pub(super) const INLINE_CAPACITY: usize = 8;

/// A sorted, duplicate-free set with binary-search lookups.
///
/// The elements are kept strictly increasing under the set's
/// [`OrderingMode`]. `add`, `remove` and `contains` locate elements by
/// binary search; iteration yields them in ascending order.
///
/// Cloning a set copies its backing sequence; clones never share state.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement [`Comparable`].
///
/// # Examples
///
/// ```rust
/// use binary_search_set::set::BinarySearchSet;
///
/// let set: BinarySearchSet<&str> = ["Banana", "apple", "Cherry"].into_iter().collect();
///
/// // The default ordering is case-insensitive
/// assert!(set.contains(&"APPLE"));
/// assert_eq!(set.to_vec(), vec!["apple", "Banana", "Cherry"]);
/// ```
#[derive(Clone)]
pub struct BinarySearchSet<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
    mode: OrderingMode,
}

impl<T: Comparable> BinarySearchSet<T> {
    /// Creates an empty set with the default (case-insensitive) ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let set: BinarySearchSet<i32> = BinarySearchSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(OrderingMode::default())
    }

    /// Creates an empty set that orders elements under `mode`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::ordering::OrderingMode;
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let mut set = BinarySearchSet::with_mode(OrderingMode::CaseSensitive);
    /// set.add("apple");
    /// assert!(set.add("APPLE"));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_mode(mode: OrderingMode) -> Self {
        Self {
            elements: SmallVec::new(),
            mode,
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
            mode: OrderingMode::default(),
        }
    }

    /// Creates a set from any sequence by adding its elements one at a time.
    ///
    /// Duplicates (under the default ordering) are dropped; the first
    /// representative of each equivalence class is kept.
    ///
    /// # Complexity
    ///
    /// O(n log n) comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let set = BinarySearchSet::from_elements(vec![3, 1, 3, 2]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_elements_with_mode(elements, OrderingMode::default())
    }

    /// Creates a set ordered under `mode` by adding the elements of a
    /// sequence one at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::ordering::OrderingMode;
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let set = BinarySearchSet::from_elements_with_mode(
    ///     ["b", "B", "a"],
    ///     OrderingMode::CaseSensitive,
    /// );
    /// assert_eq!(set.as_slice(), &["B", "a", "b"]);
    /// ```
    #[must_use]
    pub fn from_elements_with_mode<I>(elements: I, mode: OrderingMode) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_mode(mode);
        set.extend(elements);
        set
    }

    /// Creates a set from a vector that is already strictly increasing
    /// under `mode`, without re-inserting its elements.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidInput`] naming the first element that is
    /// not greater than its predecessor.
    ///
    /// # Complexity
    ///
    /// O(n) comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::ordering::OrderingMode;
    /// use binary_search_set::set::{BinarySearchSet, SetError};
    ///
    /// let set = BinarySearchSet::from_sorted_vec(vec![1, 2, 4], OrderingMode::default()).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let error = BinarySearchSet::from_sorted_vec(vec![1, 4, 2], OrderingMode::default());
    /// assert!(matches!(error, Err(SetError::InvalidInput { .. })));
    /// ```
    pub fn from_sorted_vec(elements: Vec<T>, mode: OrderingMode) -> Result<Self, SetError> {
        if let Some(offset) = elements
            .windows(2)
            .position(|window| mode.compare(&window[0], &window[1]).is_ge())
        {
            let index = offset + 1;
            tracing::debug!(index, %mode, "rejected unsorted input for from_sorted_vec");
            return Err(SetError::InvalidInput {
                operation: "BinarySearchSet::from_sorted_vec",
                reason: format!(
                    "element at index {index} is not greater than its predecessor under {mode} ordering"
                ),
            });
        }

        Ok(Self {
            elements: SmallVec::from_vec(elements),
            mode,
        })
    }

    /// Returns the ordering mode used for comparisons.
    #[inline]
    #[must_use]
    pub const fn ordering_mode(&self) -> OrderingMode {
        self.mode
    }

    /// Changes the ordering mode.
    ///
    /// The change always succeeds on an empty set or when `mode` equals the
    /// current mode. A non-empty set keeps its mode, because its elements
    /// might not be sorted under the new one; use [`reorder`] to re-sort.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ModeChangeOnNonEmpty`] if the set is non-empty
    /// and `mode` differs from the current mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::ordering::OrderingMode;
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let mut set: BinarySearchSet<&str> = BinarySearchSet::new();
    /// assert!(set.set_ordering_mode(OrderingMode::CaseSensitive).is_ok());
    ///
    /// set.add("kiwi");
    /// assert!(set.set_ordering_mode(OrderingMode::CaseInsensitive).is_err());
    /// assert_eq!(set.ordering_mode(), OrderingMode::CaseSensitive);
    /// ```
    ///
    /// [`reorder`]: BinarySearchSet::reorder
    pub fn set_ordering_mode(&mut self, mode: OrderingMode) -> Result<(), SetError> {
        if mode == self.mode || self.elements.is_empty() {
            self.mode = mode;
            return Ok(());
        }

        tracing::debug!(
            current = %self.mode,
            requested = %mode,
            len = self.elements.len(),
            "rejected ordering mode change on non-empty set"
        );
        Err(SetError::ModeChangeOnNonEmpty {
            current: self.mode,
            requested: mode,
            len: self.elements.len(),
        })
    }

    /// Switches to `mode` and re-sorts the set under it.
    ///
    /// Elements are re-added in their previous order. An element that falls
    /// into the same equivalence class as an element re-added before it is
    /// evicted; evicted elements are returned in the order they were met.
    ///
    /// # Complexity
    ///
    /// O(n log n) comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::ordering::OrderingMode;
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let mut set = BinarySearchSet::from_elements_with_mode(
    ///     ["apple", "Apple", "banana"],
    ///     OrderingMode::CaseSensitive,
    /// );
    /// assert_eq!(set.len(), 3);
    ///
    /// let evicted = set.reorder(OrderingMode::CaseInsensitive);
    /// assert_eq!(evicted, vec!["apple"]);
    /// assert_eq!(set.as_slice(), &["Apple", "banana"]);
    /// ```
    pub fn reorder(&mut self, mode: OrderingMode) -> Vec<T> {
        let previous_mode = self.mode;
        let previous = std::mem::take(&mut self.elements);
        self.mode = mode;

        let evicted: Vec<T> = previous
            .into_iter()
            .filter_map(|element| self.try_add(element).err())
            .collect();

        tracing::debug!(
            from = %previous_mode,
            to = %mode,
            len = self.elements.len(),
            evicted = evicted.len(),
            "reordered set"
        );
        evicted
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Locates `element` by binary search.
    ///
    /// Returns [`SearchResult::Found`] with the index of the equal member,
    /// or [`SearchResult::InsertionPoint`] with the index at which
    /// `element` would be inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::{BinarySearchSet, SearchResult};
    ///
    /// let set = BinarySearchSet::from_elements([10, 20, 30]);
    /// assert_eq!(set.search(&20), SearchResult::Found(1));
    /// assert_eq!(set.search(&5), SearchResult::InsertionPoint(0));
    /// ```
    #[inline]
    pub fn search<Q>(&self, element: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        binary_search(&self.elements, element, self.mode)
    }

    /// Returns the index of the member equal to `element`, if any.
    #[inline]
    #[must_use]
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        self.search(element).found()
    }

    /// Returns `true` if the set contains a member equal to `element`.
    ///
    /// Supports borrowed forms of the element type: a
    /// `BinarySearchSet<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let set = BinarySearchSet::from_elements(["Banana".to_string(), "apple".to_string()]);
    /// assert!(set.contains("APPLE"));
    /// assert!(!set.contains("cherry"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        self.search(element).is_found()
    }

    /// Returns the member equal to `element`, if any.
    ///
    /// In a case-insensitive set this is the stored representative, which
    /// may differ in case from `element`.
    #[inline]
    #[must_use]
    pub fn get_equivalent<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        self.position(element).map(|index| &self.elements[index])
    }

    /// Adds `element` if no equal member exists.
    ///
    /// Returns `true` if the element was added and `false` if an equal
    /// member was already present, in which case the set is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons plus an O(n) shift of the backing sequence.
    #[inline]
    pub fn add(&mut self, element: T) -> bool {
        self.try_add(element).is_ok()
    }

    /// Adds `element` if no equal member exists.
    ///
    /// # Errors
    ///
    /// Gives `element` back as `Err` if an equal member was already present.
    /// On success returns the index at which it was inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let mut set = BinarySearchSet::new();
    /// assert_eq!(set.try_add("plum"), Ok(0));
    /// assert_eq!(set.try_add("fig"), Ok(0));
    /// assert_eq!(set.try_add("PLUM"), Err("PLUM"));
    /// ```
    pub fn try_add(&mut self, element: T) -> Result<usize, T> {
        match binary_search(&self.elements, &element, self.mode) {
            SearchResult::Found(_) => Err(element),
            SearchResult::InsertionPoint(index) => {
                self.elements.insert(index, element);
                Ok(index)
            }
        }
    }

    /// Removes the member equal to `element`.
    ///
    /// Returns `true` if a member was removed and `false` if none was
    /// present. Removing a non-member is not an error.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes and returns the member equal to `element`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let mut set = BinarySearchSet::from_elements(["Apple", "pear"]);
    /// assert_eq!(set.take(&"APPLE"), Some("Apple"));
    /// assert_eq!(set.take(&"APPLE"), None);
    /// ```
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Comparable + ?Sized,
    {
        self.position(element)
            .map(|index| self.elements.remove(index))
    }

    /// Removes all elements. The ordering mode is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the element at `index` in ascending order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a slice in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }

    /// Returns a restartable cursor positioned at the first element.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.elements)
    }

    /// Returns a `Vec` holding clones of the elements in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.to_vec()
    }

    /// Consumes the set, returning its elements in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }

    /// Returns `true` if `other` has the same number of elements and each
    /// of them is contained in this set.
    ///
    /// Comparing a set with itself returns `true` immediately.
    pub fn equals<S>(&self, other: &S) -> bool
    where
        S: SortedSet<Element = T> + ?Sized,
    {
        SortedSet::equals(self, other)
    }

    /// Returns `true` if every element of `other` is contained in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let set = BinarySearchSet::from_elements([1, 2, 3]);
    /// assert!(set.has_subset(&BinarySearchSet::from_elements([1, 3])));
    /// assert!(!set.has_subset(&BinarySearchSet::from_elements([3, 4])));
    /// ```
    pub fn has_subset<S>(&self, other: &S) -> bool
    where
        S: SortedSet<Element = T> + ?Sized,
    {
        SortedSet::has_subset(self, other)
    }

    /// Returns a new set holding every element of either set.
    ///
    /// The result starts as a clone of `other`, so it uses `other`'s
    /// ordering mode, and then receives every element of this set. Where
    /// both sets hold equal elements, `other`'s representative is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let left = BinarySearchSet::from_elements([1, 2, 3]);
    /// let right = BinarySearchSet::from_elements([2, 3, 4]);
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        SortedSet::union(self, other)
    }

    /// Returns a new set holding the elements of this set that `other`
    /// contains.
    ///
    /// The result uses this set's ordering mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let left = BinarySearchSet::from_elements([1, 2, 3]);
    /// let right = BinarySearchSet::from_elements([2, 3, 4]);
    /// assert_eq!(left.intersection(&right).as_slice(), &[2, 3]);
    /// ```
    #[must_use]
    pub fn intersection<S>(&self, other: &S) -> Self
    where
        T: Clone,
        S: SortedSet<Element = T> + ?Sized,
    {
        SortedSet::intersection(self, other)
    }

    /// Returns a new set holding the elements of this set that `other`
    /// does not contain.
    ///
    /// The result uses this set's ordering mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_search_set::set::BinarySearchSet;
    ///
    /// let left = BinarySearchSet::from_elements([1, 2, 3]);
    /// let right = BinarySearchSet::from_elements([2, 3, 4]);
    /// assert_eq!(left.difference(&right).as_slice(), &[1]);
    /// ```
    #[must_use]
    pub fn difference<S>(&self, other: &S) -> Self
    where
        T: Clone,
        S: SortedSet<Element = T> + ?Sized,
    {
        SortedSet::difference(self, other)
    }
}

impl<T: Comparable> SortedSet for BinarySearchSet<T> {
    type Element = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.search(element).is_found()
    }

    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.try_add(element).is_ok()
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    #[inline]
    fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(&self.elements)
    }

    #[inline]
    fn empty_like(&self) -> Self {
        Self::with_mode(self.mode)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Comparable> Default for BinarySearchSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Comparable> FromIterator<T> for BinarySearchSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Comparable> Extend<T> for BinarySearchSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for BinarySearchSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements.into_iter())
    }
}

impl<'a, T: Comparable> IntoIterator for &'a BinarySearchSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they share an ordering mode and hold the same
/// members under it. Sets with different modes are never equal.
impl<T: Comparable> PartialEq for BinarySearchSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.equals(other)
    }
}

impl<T: Comparable> Eq for BinarySearchSet<T> {}

impl<T: fmt::Debug> fmt::Debug for BinarySearchSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(BinarySearchSet<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Iter<'static, String>: Send, Sync, ExactSizeIterator);
static_assertions::assert_impl_all!(Cursor<'static, std::sync::Mutex<i32>>: Clone);
static_assertions::assert_impl_all!(Iter<'static, std::sync::Mutex<i32>>: Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for BinarySearchSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct BinarySearchSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> BinarySearchSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for BinarySearchSetVisitor<T>
where
    T: serde::Deserialize<'de> + Comparable,
{
    type Value = BinarySearchSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = BinarySearchSet::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for BinarySearchSet<T>
where
    T: serde::Deserialize<'de> + Comparable,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BinarySearchSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
