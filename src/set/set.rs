//! The Set trait.

use std::hash::{BuildHasher, Hash};

use super::{SafeSet, UnsafeSet};

/// `Set`
///
/// The operations common to both flavors of sets.
///
/// The mutators take `&mut self`, which is the most restrictive receiver;
/// the `SafeSet` can do with `&self`, and its inherent methods do.
pub trait Set<T> {
    /// Adds `value` to the set, returning whether it was newly inserted.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set, returning whether it was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns whether `value` is a member of the set.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of members of the set.
    fn len(&self) -> usize;

    /// Returns whether the set has no member.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Removes all members of the set.
    fn clear(&mut self);

    /// Returns a copy of the members of the set, in no particular order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T, S> Set<T> for UnsafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn insert(&mut self, value: T) -> bool { UnsafeSet::insert(self, value) }

    fn remove(&mut self, value: &T) -> bool { UnsafeSet::remove(self, value) }

    fn contains(&self, value: &T) -> bool { UnsafeSet::contains(self, value) }

    fn len(&self) -> usize { UnsafeSet::len(self) }

    fn is_empty(&self) -> bool { UnsafeSet::is_empty(self) }

    fn clear(&mut self) { UnsafeSet::clear(self) }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        UnsafeSet::to_vec(self)
    }
}

impl<T, S> Set<T> for SafeSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn insert(&mut self, value: T) -> bool { SafeSet::insert(self, value) }

    fn remove(&mut self, value: &T) -> bool { SafeSet::remove(self, value) }

    fn contains(&self, value: &T) -> bool { SafeSet::contains(self, value) }

    fn len(&self) -> usize { SafeSet::len(self) }

    fn is_empty(&self) -> bool { SafeSet::is_empty(self) }

    fn clear(&mut self) { SafeSet::clear(self) }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        SafeSet::to_vec(self)
    }
}

#[cfg(test)]
mod tests {

use std::hash::Hash;

use super::{SafeSet, Set, UnsafeSet};

//  Exercises a `Set` through the trait only.
fn exercise<S: Set<u32>>(mut set: S) {
    assert!(set.is_empty());

    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(!set.insert(1));

    assert_eq!(2, set.len());
    assert!(set.contains(&1));
    assert!(!set.contains(&3));

    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert_eq!(vec![2], set.to_vec());

    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(&2));
}

fn boxed<T: Eq + Hash + 'static>(safe: bool) -> Box<dyn Set<T>> {
    if safe {
        Box::new(SafeSet::<T>::new())
    } else {
        Box::new(UnsafeSet::<T>::new())
    }
}

#[test]
fn unsafe_set_through_trait() {
    exercise(UnsafeSet::new());
}

#[test]
fn safe_set_through_trait() {
    exercise(SafeSet::new());
}

#[test]
fn trait_object() {
    for safe in [false, true] {
        let mut set = boxed::<&str>(safe);

        assert!(set.insert("Hello"));
        assert!(set.insert("World"));
        assert!(!set.insert("Hello"));

        assert_eq!(2, set.len());
    }
}

}   //  mod tests
