//! Traversal over a [`BinarySearchSet`](super::BinarySearchSet).
//!
//! - [`Cursor`]: a restartable forward cursor with an explicit position
//! - [`Iter`]: a borrowing iterator in ascending order
//! - [`IntoIter`]: an owning iterator in ascending order
//!
//! All three borrow or own the backing sequence, so the set cannot be
//! mutated while a traversal is alive.

use std::iter::FusedIterator;

use super::binary_search_set::INLINE_CAPACITY;

/// A forward cursor over the elements of a set in ascending order.
///
/// The cursor starts at the first element. [`advance`](Cursor::advance)
/// moves it forward, [`rewind`](Cursor::rewind) moves it back to the
/// start, and [`valid`](Cursor::valid) reports whether it still points at
/// an element. As an [`Iterator`] it yields the current element and then
/// advances, so one pass consumes it until the next `rewind`.
///
/// # Examples
///
/// ```rust
/// use binary_search_set::set::BinarySearchSet;
///
/// let set: BinarySearchSet<i32> = [5, 3, 8].into_iter().collect();
/// let mut cursor = set.cursor();
///
/// let mut visited = Vec::new();
/// while cursor.valid() {
///     visited.push((cursor.key(), *cursor.current().unwrap()));
///     cursor.advance();
/// }
/// assert_eq!(visited, vec![(0, 3), (1, 5), (2, 8)]);
///
/// cursor.rewind();
/// assert_eq!(cursor.copied().collect::<Vec<_>>(), vec![3, 5, 8]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(super) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    /// Moves the cursor back to the first element.
    #[inline]
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns the element under the cursor, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        self.elements.get(self.position)
    }

    /// Returns the position of the cursor.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> usize {
        self.position
    }

    /// Moves the cursor to the next element.
    ///
    /// Advancing past the end keeps the cursor invalid.
    #[inline]
    pub const fn advance(&mut self) {
        if self.position < self.elements.len() {
            self.position += 1;
        }
    }

    /// Returns `true` while the cursor points at an element.
    #[inline]
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.position < self.elements.len()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current();
        self.advance();
        current
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Iterator over references to the elements of a set in ascending order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a set in ascending order.
pub struct IntoIter<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) const fn new(inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
