//! Internal testing utilities

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::thread::Scope;

//  The number of concurrent callers in stress tests.
pub const ROUTINES: usize = 750;

//  The number of operations performed by each caller in stress tests.
pub const ITERATIONS: usize = 100;

//  Spawns `total` threads within `scope`, each invoking `action` with its own
//  id, from 0 to `total` excluded.
//
//  The threads are joined when `scope` ends.
pub fn run_in_parallel<'env, F>(scope: &Scope<'env>, total: usize, action: F)
where
    F: Fn(usize) + Clone + Send + 'env,
{
    for id in 0..total {
        let action = action.clone();
        scope.spawn(move |_| action(id));
    }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
//
//  Equality and hashing only consider `value`.
pub struct SpyElement<'a> {
    value: u32,
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(value: u32, count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { value, count }
    }
}

impl<'a> Clone for SpyElement<'a> {
    fn clone(&self) -> Self { Self::new(self.value, self.count) }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> Eq for SpyElement<'a> {}

impl<'a> PartialEq for SpyElement<'a> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<'a> Hash for SpyElement<'a> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}

//  A value which may panic when hashed.
//
//  Equality only considers the value.
#[derive(Clone, Copy, Debug)]
pub struct PanickyHash(u32, bool);

impl PanickyHash {
    //  Creates a normal instance.
    pub fn new(value: u32) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: u32) -> Self { Self(value, true) }
}

impl Eq for PanickyHash {}

impl PartialEq for PanickyHash {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl Hash for PanickyHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.1 { panic!("Oh No!") }

        self.0.hash(state)
    }
}
