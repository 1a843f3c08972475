//! The SafeSet

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{Snapshot, UnsafeSet};

use super::lock::RecoverableRwLock;

//
//  Public Interface
//

/// `SafeSet`
///
/// A hash set which may be read and written from multiple threads at once.
///
/// The `SafeSet` owns an `UnsafeSet`, and guards it with a reader/writer lock:
/// every method acquires the lock, delegates to the `UnsafeSet`, and releases
/// the lock before returning, so that concurrent calls behave as if executed
/// one at a time in some order.
///
/// -   Mutators acquire the lock in exclusive mode.
/// -   Readers acquire the lock in shared mode; any number of readers may
///     proceed concurrently, as long as no mutator is in progress.
///
/// The lock is released on every exit path, including unwinding. Should a
/// delegated call panic, for example in the `Hash` implementation of an
/// element, the set remains usable by all other callers.
///
/// #   Example of Sync.
///
/// A `SafeSet<T>` can be shared across threads whenever `T` is both `Send` and
/// `Sync`.
///
/// ```
/// # use lockset::set::SafeSet;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let set: SafeSet<_> = SafeSet::new();
/// set.insert("Hello, World".to_string());
///
/// ensure_sync(set);
/// ```
///
/// #   Example of not Sync.
///
/// A non-Send T prevents the `SafeSet` from being Sync.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// # use lockset::set::SafeSet;
/// fn ensure_sync<T: Sync>(_: T) {}
///
/// let set: SafeSet<_> = SafeSet::new();
/// set.insert(Rc::new(3));
///
/// ensure_sync(set);
/// ```
///
/// #   Example of UnsafeSet.
///
/// Conversely, an `UnsafeSet` cannot be mutated from multiple threads.
///
/// ```compile_fail
/// # use std::thread;
/// # use lockset::set::UnsafeSet;
/// let mut set: UnsafeSet<_> = UnsafeSet::new();
///
/// thread::scope(|scope| {
///     scope.spawn(|| set.insert(1));
///     scope.spawn(|| set.insert(2));
/// });
/// ```
pub struct SafeSet<T, S = RandomState> {
    inner: RecoverableRwLock<UnsafeSet<T, S>>,
}

impl<T> SafeSet<T, RandomState> {
    /// Creates a new, empty, instance.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<i32> = SafeSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// ```
    pub fn new() -> Self { Self::from(UnsafeSet::new()) }

    /// Creates a new, empty, instance with space for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(UnsafeSet::with_capacity(capacity))
    }
}

impl<T, S> SafeSet<T, S> {
    /// Creates a new, empty, instance using `hasher` to hash the elements.
    pub fn with_hasher(hasher: S) -> Self {
        Self::from(UnsafeSet::with_hasher(hasher))
    }

    /// Creates a new, empty, instance with space for at least `capacity`
    /// elements, using `hasher` to hash the elements.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from(UnsafeSet::with_capacity_and_hasher(capacity, hasher))
    }

    /// Consumes the instance, returning the underlying `UnsafeSet`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.insert(1);
    ///
    /// let mut set = set.into_inner();
    /// assert!(set.remove(&1));
    /// ```
    pub fn into_inner(self) -> UnsafeSet<T, S> { self.inner.into_inner() }

    /// Returns the underlying `UnsafeSet`.
    ///
    /// No locking takes place, as the exclusive borrow statically guarantees
    /// that no other thread may access the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let mut set: SafeSet<_> = SafeSet::new();
    /// set.get_mut().extend([1, 2, 3]);
    ///
    /// assert_eq!(3, set.len());
    /// ```
    pub fn get_mut(&mut self) -> &mut UnsafeSet<T, S> { self.inner.get_mut() }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.inner.read().is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// In the presence of concurrent mutators, the result reflects the state
    /// of the set at some point during the call.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.insert(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.inner.read().len() }

    /// Returns a copy of the elements of the instance, in no particular order.
    ///
    /// The copy is made while holding the lock, and is independent of the
    /// instance: further updates to either are not reflected in the other.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.extend([3, 1, 2]);
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
        self.inner.read().to_vec()
    }

    /// Returns a single-pass iterator over a copy of the elements of the
    /// instance.
    ///
    /// The copy is fully materialized while holding the lock, which is
    /// released before returning: consuming the snapshot never blocks, nor is
    /// blocked by, other callers.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.extend([1, 2, 3]);
    ///
    /// for e in set.snapshot() {
    ///     set.insert(e * 10);
    /// }
    ///
    /// assert_eq!(6, set.len());
    /// ```
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.to_vec())
    }
}

impl<T, S> SafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
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
        self.inner.read().contains(value)
    }

    /// Inserts a value into the set.
    ///
    /// Returns whether the value was newly inserted; if the value was already
    /// present, the set is left unchanged and `value` is dropped.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    ///
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    ///
    /// assert_eq!(1, set.len());
    /// ```
    pub fn insert(&self, value: T) -> bool { self.inner.write().insert(value) }

    /// Inserts multiple values in the set, under a single acquisition of the
    /// lock.
    ///
    /// If a value is already present, it is dropped.
    ///
    /// The collection is drained before the lock is acquired, hence it may
    /// freely read from the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.extend([1, 2, 2, 3]);
    ///
    /// assert_eq!(3, set.len());
    /// ```
    pub fn extend<C>(&self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        let values: Vec<_> = collection.into_iter().collect();

        self.inner.write().extend(values);
    }

    /// Removes a value from the set.
    ///
    /// Returns whether the value was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.insert(3);
    ///
    /// assert!(set.remove(&3));
    /// assert!(!set.remove(&3));
    /// ```
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.inner.write().remove(value)
    }

    /// Removes multiple values from the set, under a single acquisition of the
    /// lock.
    ///
    /// Values which are not present are ignored.
    ///
    /// The collection is drained before the lock is acquired, hence it may
    /// freely read from the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.extend([1, 2, 3]);
    ///
    /// set.remove_all([2, 3, 4]);
    ///
    /// assert_eq!(vec![1], set.to_vec());
    /// ```
    pub fn remove_all<C>(&self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        let values: Vec<_> = collection.into_iter().collect();

        self.inner.write().remove_all(values);
    }
}

impl<T, S: Clone> SafeSet<T, S> {
    /// Clears the instance.
    ///
    /// The backing table is replaced by a brand new, empty, one while holding
    /// the lock in exclusive mode.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lockset::set::SafeSet;
    /// let set: SafeSet<_> = SafeSet::new();
    /// set.extend([1, 2, 3]);
    ///
    /// set.clear();
    ///
    /// assert_eq!(0, set.len());
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&self) { self.inner.write().clear() }
}

impl<T, S> From<UnsafeSet<T, S>> for SafeSet<T, S> {
    fn from(set: UnsafeSet<T, S>) -> Self {
        Self { inner: RecoverableRwLock::new(set) }
    }
}

impl<T: Clone, S: Clone> Clone for SafeSet<T, S> {
    fn clone(&self) -> Self { Self::from(self.inner.read().clone()) }
}

impl<T, S: Default> Default for SafeSet<T, S> {
    fn default() -> Self { Self::from(UnsafeSet::default()) }
}

impl<T: fmt::Debug, S> fmt::Debug for SafeSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeSet").field("set", &self.inner).finish()
    }
}

impl<T, S> FromIterator<T> for SafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Self::from(UnsafeSet::from_iter(collection))
    }
}

//  mod tests
