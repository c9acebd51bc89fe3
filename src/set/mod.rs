//! Sorted set engine.
//!
//! This module provides a sorted, duplicate-free set over a contiguous
//! backing sequence, together with the pieces it is built from:
//!
//! - [`BinarySearchSet`]: the set itself
//! - [`SortedSet`]: the capability trait shared by set implementations
//! - [`binary_search`] and [`SearchResult`]: insertion-point search
//! - [`Cursor`], [`Iter`], [`IntoIter`]: traversal
//! - [`SetError`]: construction and configuration errors
//!
//! # Set Algebra
//!
//! `union`, `intersection` and `difference` always return a new set and
//! leave both operands unchanged. `intersection`, `difference`,
//! `has_subset` and `equals` accept any [`SortedSet`] with the same
//! element type, so a [`BinarySearchSet`] can be combined with a
//! [`BTreeSet`]:
//!
//! ```rust
//! use binary_search_set::set::BinarySearchSet;
//! use std::collections::BTreeSet;
//!
//! let ours = BinarySearchSet::from_elements([1, 2, 3, 4]);
//! let theirs: BTreeSet<i32> = [2, 4, 6].into_iter().collect();
//!
//! assert_eq!(ours.intersection(&theirs).as_slice(), &[2, 4]);
//! assert_eq!(ours.difference(&theirs).as_slice(), &[1, 3]);
//! assert!(!ours.has_subset(&theirs));
//! ```

mod binary_search_set;
mod cursor;
mod error;
mod search;

pub use binary_search_set::BinarySearchSet;
pub use cursor::{Cursor, IntoIter, Iter};
pub use error::SetError;
pub use search::{SearchResult, binary_search};

use std::collections::BTreeSet;
use std::collections::btree_set;

/// A mutable set whose elements can be traversed in ascending order.
///
/// Implementors supply membership, insertion, removal and traversal. The
/// set algebra (`equals`, `has_subset`, `union`, `intersection`,
/// `difference`) is provided on top of them.
///
/// # Laws
///
/// For every implementation and all sets `a`, `b`:
///
/// - `a.union(b).len() <= a.len() + b.len()`
/// - `a.intersection(b).len() <= min(a.len(), b.len())`
/// - every element of `a.difference(b)` is in `a` and not in `b`
/// - `a.equals(a)`
///
/// # Examples
///
/// ```rust
/// use binary_search_set::set::{BinarySearchSet, SortedSet};
/// use std::collections::BTreeSet;
///
/// fn fill<S: SortedSet<Element = u8>>(set: &mut S) -> usize {
///     for value in [3, 1, 3, 2] {
///         set.add(value);
///     }
///     set.len()
/// }
///
/// assert_eq!(fill(&mut BinarySearchSet::new()), 3);
/// assert_eq!(fill(&mut BTreeSet::new()), 3);
/// ```
pub trait SortedSet {
    /// The element type.
    type Element;

    /// Iterator over the elements in ascending order.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the set has a member equal to `element`.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Adds `element` unless an equal member exists; returns whether it was added.
    fn add(&mut self, element: Self::Element) -> bool;

    /// Removes the member equal to `element`; returns whether one was removed.
    fn remove(&mut self, element: &Self::Element) -> bool;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns an iterator over the elements in ascending order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns an empty set configured like this one.
    #[must_use]
    fn empty_like(&self) -> Self
    where
        Self: Sized;

    /// Returns `true` if both sets have the same size and every element of
    /// `other` is contained in this set.
    fn equals<S>(&self, other: &S) -> bool
    where
        S: SortedSet<Element = Self::Element> + ?Sized,
    {
        if std::ptr::addr_eq(std::ptr::from_ref(self), std::ptr::from_ref(other)) {
            return true;
        }
        self.len() == other.len() && other.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if every element of `other` is contained in this set.
    fn has_subset<S>(&self, other: &S) -> bool
    where
        S: SortedSet<Element = Self::Element> + ?Sized,
    {
        other.iter().all(|element| self.contains(element))
    }

    /// Returns a clone of `other` extended with every element of this set.
    #[must_use]
    fn union(&self, other: &Self) -> Self
    where
        Self: Sized + Clone,
        Self::Element: Clone,
    {
        let mut result = other.clone();
        for element in self.iter() {
            result.add(element.clone());
        }
        result
    }

    /// Returns the elements of this set that `other` contains.
    #[must_use]
    fn intersection<S>(&self, other: &S) -> Self
    where
        Self: Sized,
        Self::Element: Clone,
        S: SortedSet<Element = Self::Element> + ?Sized,
    {
        let mut result = self.empty_like();
        for element in self.iter().filter(|element| other.contains(element)) {
            result.add(element.clone());
        }
        result
    }

    /// Returns the elements of this set that `other` does not contain.
    #[must_use]
    fn difference<S>(&self, other: &S) -> Self
    where
        Self: Sized,
        Self::Element: Clone,
        S: SortedSet<Element = Self::Element> + ?Sized,
    {
        let mut result = self.empty_like();
        for element in self.iter().filter(|element| !other.contains(element)) {
            result.add(element.clone());
        }
        result
    }
}

impl<T: Ord> SortedSet for BTreeSet<T> {
    type Element = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.insert(element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn empty_like(&self) -> Self {
        Self::new()
    }
}
