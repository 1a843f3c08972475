//! A Snapshot of a set.
//!
//! The Snapshot owns a copy of the elements, and does not reflect updates to
//! the set it was taken from.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

/// `Snapshot`
///
/// A single-pass iterator over a copy of the elements of a set, taken at the
/// moment the instance is created.
///
/// The order in which elements are iterated on is unspecified.
///
/// A `Snapshot` can be cloned to iterate over the remaining elements again.
///
/// #   Example
///
/// ```
/// #   use lockset::set::SafeSet;
/// let set: SafeSet<_> = SafeSet::new();
/// set.insert(1);
///
/// let mut snapshot = set.snapshot();
/// let again = snapshot.clone();
///
/// set.insert(2);
///
/// assert_eq!(Some(1), snapshot.next());
/// assert_eq!(None, snapshot.next());
/// assert_eq!(vec![1], again.collect::<Vec<_>>());
/// ```
#[derive(Clone)]
pub struct Snapshot<T> {
    elements: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    //  Creates a new instance.
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self { elements: elements.into_iter() }
    }

    /// Returns the elements not yet iterated on.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let set: UnsafeSet<_> = [1, 2].into_iter().collect();
    ///
    /// let mut snapshot = set.snapshot();
    /// snapshot.next();
    ///
    /// assert_eq!(1, snapshot.as_slice().len());
    /// ```
    pub fn as_slice(&self) -> &[T] { self.elements.as_slice() }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> { self.elements.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.elements.size_hint() }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    fn next_back(&mut self) -> Option<T> { self.elements.next_back() }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}

//  mod tests
