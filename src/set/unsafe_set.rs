//! The UnsafeSet

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use log::trace;

use super::Snapshot;

//
//  Public Interface
//

/// `UnsafeSet`
///
/// A hash set without any internal synchronization.
///
/// All mutators require `&mut self`, hence an `UnsafeSet` may only be mutated
/// from multiple threads when the caller provides the synchronization. Use a
/// `SafeSet` otherwise.
///
/// #   Iteration order
///
/// The order in which elements are iterated on is unspecified, and is not
/// stable across mutations, clears, or instances.
#[derive(Clone)]
pub struct UnsafeSet<T, S = RandomState> {
    //  Invariant: a value is in `table` if and only if it is a member.
    table: HashSet<T, S>,
}

impl<T> UnsafeSet<T, RandomState> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let set: UnsafeSet<i32> = UnsafeSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// ```
    pub fn new() -> Self { Self::with_hasher(RandomState::new()) }

    /// Creates a new, empty, instance with space for at least `capacity`
    /// elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let set: UnsafeSet<i32> = UnsafeSet::with_capacity(16);
    ///
    /// assert_eq!(0, set.len());
    /// assert!(set.capacity() >= 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> UnsafeSet<T, S> {
    /// Creates a new, empty, instance using `hasher` to hash the elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use std::collections::hash_map::DefaultHasher;
    /// #   use std::hash::BuildHasherDefault;
    /// #   use lockset::set::UnsafeSet;
    /// let hasher = BuildHasherDefault::<DefaultHasher>::default();
    /// let mut set = UnsafeSet::with_hasher(hasher);
    ///
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_hasher(hasher: S) -> Self {
        Self { table: HashSet::with_hasher(hasher) }
    }

    /// Creates a new, empty, instance with space for at least `capacity`
    /// elements, using `hasher` to hash the elements.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self { table: HashSet::with_capacity_and_hasher(capacity, hasher) }
    }

    /// Returns the hasher of the instance.
    pub fn hasher(&self) -> &S { self.table.hasher() }

    /// Returns the number of elements the instance can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize { self.table.capacity() }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = UnsafeSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = UnsafeSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.table.len() }

    /// Returns an iterator over the elements of the instance.
    ///
    /// The iterator borrows the instance: it is not possible to mutate the
    /// instance until the iterator is dropped.
    ///
    /// ```compile_fail
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();
    ///
    /// for e in set.iter() {
    ///     set.insert(e + 3);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter(self.table.iter()) }

    /// Returns a copy of the elements of the instance, in no particular order.
    ///
    /// The copy is independent of the instance: further updates to either are
    /// not reflected in the other.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = [3, 1, 2].into_iter().collect();
    ///
    /// let mut slice = set.to_vec();
    /// slice.sort();
    ///
    /// set.insert(4);
    ///
    /// assert_eq!(vec![1, 2, 3], slice);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.table.iter().cloned().collect()
    }

    /// Returns a single-pass iterator over a copy of the elements of the
    /// instance.
    ///
    /// Unlike `iter`, the snapshot does not borrow the instance, which may
    /// therefore be mutated while the snapshot is consumed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();
    ///
    /// for e in set.snapshot() {
    ///     set.remove(&e);
    ///     set.insert(e * 10);
    /// }
    ///
    /// let mut slice = set.to_vec();
    /// slice.sort();
    ///
    /// assert_eq!(vec![10, 20, 30], slice);
    /// ```
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.to_vec())
    }
}

impl<T, S> UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = UnsafeSet::new();
    /// set.insert("Hello".to_string());
    ///
    /// assert!(set.contains("Hello"));
    /// assert!(!set.contains("World"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.table.contains(value)
    }

    /// Inserts a value into the set.
    ///
    /// Returns whether the value was newly inserted; if the value was already
    /// present, the set is left unchanged and `value` is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = UnsafeSet::new();
    ///
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&mut self, value: T) -> bool { self.table.insert(value) }

    /// Removes a value from the set.
    ///
    /// Returns whether the value was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = UnsafeSet::new();
    /// set.insert(3);
    ///
    /// assert!(set.remove(&3));
    /// assert!(!set.remove(&3));
    ///
    /// assert!(set.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.table.remove(value)
    }

    /// Removes multiple values from the set.
    ///
    /// Values which are not present are ignored.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();
    ///
    /// set.remove_all([2, 3, 4]);
    ///
    /// assert_eq!(vec![1], set.to_vec());
    /// ```
    pub fn remove_all<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        let before = self.table.len();

        for value in collection {
            self.table.remove(&value);
        }

        trace!("removed {} of {} elements", before - self.table.len(), before);
    }
}

impl<T, S: Clone> UnsafeSet<T, S> {
    /// Clears the instance.
    ///
    /// The backing table is replaced by a brand new, empty, one sharing the
    /// same hasher; the elements are dropped, and the memory released.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::UnsafeSet;
    /// let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();
    ///
    /// set.clear();
    ///
    /// assert_eq!(0, set.len());
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.table.len());

        self.table = HashSet::with_hasher(self.table.hasher().clone());
    }
}

impl<T, S: Default> Default for UnsafeSet<T, S> {
    fn default() -> Self { Self::with_hasher(S::default()) }
}

impl<T: fmt::Debug, S> fmt::Debug for UnsafeSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsafeSet")
            .field("length", &self.table.len())
            .field("elements", &self.table)
            .finish()
    }
}

impl<T, S> PartialEq for UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool { self.table == other.table }
}

impl<T, S> Eq for UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, S> Extend<T> for UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts multiple values in the set.
    ///
    /// If a value is already present, it is dropped.
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        let before = self.table.len();

        self.table.extend(collection);

        trace!("inserted {} new elements", self.table.len() - before);
    }
}

impl<T, S> FromIterator<T> for UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self { table: HashSet::from_iter(collection) }
    }
}

impl<T, S> IntoIterator for UnsafeSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> { IntoIter(self.table.into_iter()) }
}

impl<'a, T, S> IntoIterator for &'a UnsafeSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// An iterator over the elements of an `UnsafeSet`, borrowing it.
pub struct Iter<'a, T>(hash_set::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over the elements of an `UnsafeSet`, consuming it.
pub struct IntoIter<T>(hash_set::IntoIter<T>);

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {

use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;

use super::UnsafeSet;
use super::super::tester::{SpyCount, SpyElement, ROUTINES};

#[test]
fn add_remove() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();

    for i in 0..ROUTINES {
        assert!(set.insert(i));
    }

    for i in 0..ROUTINES {
        assert!(set.remove(&i));
    }

    assert_eq!(0, set.len());
}

#[test]
fn contains() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();

    for i in 0..1000 {
        set.insert(i);
    }

    for i in 0..ROUTINES {
        assert!(set.contains(&i), "expected set to contain {}", i);
    }

    assert!(!set.contains(&1000));
}

#[test]
fn add_remove_contains() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();

    set.extend(0..ROUTINES);

    for i in 0..ROUTINES {
        assert!(set.contains(&i), "expected set to contain {}", i);
    }

    set.remove_all(0..ROUTINES);

    assert_eq!(0, set.len());
}

#[test]
fn insert_idempotent() {
    let mut once: UnsafeSet<_> = UnsafeSet::new();
    once.insert("a");

    let mut twice: UnsafeSet<_> = UnsafeSet::new();
    assert!(twice.insert("a"));
    assert!(!twice.insert("a"));

    assert_eq!(once, twice);
    assert_eq!(1, twice.len());
}

#[test]
fn insert_remove_inverse() {
    let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();
    let before = set.clone();

    assert!(set.insert(4));
    assert!(set.remove(&4));

    assert_eq!(before, set);
    assert!(!set.contains(&4));
}

#[test]
fn remove_absent() {
    let mut set: UnsafeSet<_> = [1, 2].into_iter().collect();

    assert!(!set.remove(&3));
    set.remove_all([3, 4, 5]);

    assert_eq!(2, set.len());
}

#[test]
fn extend_duplicates() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();

    set.extend([1, 2, 2, 3, 3, 3]);
    set.extend([3, 4]);

    assert_eq!(4, set.len());
}

#[test]
fn clear_totality() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();

    set.extend(0..10);
    set.remove_all([2, 4]);
    set.insert(42);

    set.clear();

    assert_eq!(0, set.len());
    assert!(set.is_empty());

    for i in (0..10).chain([42]) {
        assert!(!set.contains(&i));
    }

    //  Still usable afterwards.
    assert!(set.insert(1));
    assert_eq!(1, set.len());
}

#[test]
fn clear_drops_elements() {
    let count = SpyCount::zero();

    let mut set: UnsafeSet<_> = UnsafeSet::new();
    set.insert(SpyElement::new(1, &count));
    set.insert(SpyElement::new(2, &count));

    assert_eq!(2, count.get());

    set.clear();

    assert_eq!(0, count.get());
}

#[test]
fn clear_releases_memory() {
    let mut set: UnsafeSet<_> = UnsafeSet::new();
    set.extend(0..1000);

    set.clear();

    assert_eq!(0, set.capacity());
}

#[test]
fn clear_keeps_hasher() {
    let hasher = BuildHasherDefault::<DefaultHasher>::default();

    let mut set = UnsafeSet::with_hasher(hasher);
    set.extend(["a", "b"]);

    set.clear();
    set.insert("c");

    assert!(set.contains("c"));
}

#[test]
fn borrowed_lookup() {
    let mut set: UnsafeSet<String> = UnsafeSet::new();
    set.insert("Hello".to_string());

    assert!(set.contains("Hello"));
    assert!(set.remove("Hello"));
    assert!(!set.contains("Hello"));
}

#[test]
fn to_vec_snapshot_isolation() {
    let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();

    let slice = set.to_vec();

    set.insert(4);
    set.remove(&1);

    let mut slice = slice;
    slice.sort();

    assert_eq!(vec![1, 2, 3], slice);
}

#[test]
fn to_vec_independent() {
    let set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();

    let mut slice = set.to_vec();
    slice.clear();

    assert_eq!(3, set.len());
}

#[test]
fn snapshot_isolation() {
    let mut set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();

    let snapshot = set.snapshot();

    set.clear();
    set.insert(7);

    let mut elements: Vec<_> = snapshot.collect();
    elements.sort();

    assert_eq!(vec![1, 2, 3], elements);
}

#[test]
fn iter() {
    let set: UnsafeSet<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(3, set.iter().len());
    assert_eq!(6, set.iter().sum::<i32>());
    assert_eq!(6, (&set).into_iter().copied().sum::<i32>());
}

#[test]
fn trait_debug() {
    let set: UnsafeSet<_> = [1].into_iter().collect();

    assert_eq!("UnsafeSet { length: 1, elements: {1} }", format!("{:?}", set));
}

#[test]
fn trait_default() {
    let set: UnsafeSet<i32> = Default::default();

    assert!(set.is_empty());
}

#[test]
fn trait_into_iterator() {
    let set: UnsafeSet<_> = ["Hello".to_string()].into_iter().collect();

    for e in set {
        assert_eq!("Hello", e);
    }
}

#[test]
fn trait_partial_eq() {
    let mut left: UnsafeSet<_> = [1, 2].into_iter().collect();
    let right: UnsafeSet<_> = [2, 1].into_iter().collect();

    assert_eq!(left, right);

    left.insert(3);

    assert_ne!(left, right);
}

}   //  mod tests
