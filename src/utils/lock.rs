//! A reader/writer lock which shrugs off poisoning.
//!
//! The standard `RwLock` poisons itself whenever a thread panics while
//! holding it in exclusive mode, and every subsequent acquisition then
//! reports an error.
//!
//! The data guarded in this library is always left in a valid state by a
//! panic, hence poisoning is purely noise: the `RecoverableRwLock` logs it,
//! clears it, and hands out the guard regardless.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

pub struct RecoverableRwLock<T>(RwLock<T>);

impl<T> RecoverableRwLock<T> {
    pub fn new(value: T) -> Self { Self(RwLock::new(value)) }

    //  Acquires the lock in shared mode, blocking until available.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read().unwrap_or_else(|poisoned| {
            self.recover("read");
            poisoned.into_inner()
        })
    }

    //  Acquires the lock in exclusive mode, blocking until available.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write().unwrap_or_else(|poisoned| {
            self.recover("write");
            poisoned.into_inner()
        })
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.0.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> T {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub fn is_poisoned(&self) -> bool { self.0.is_poisoned() }

    #[cold]
    fn recover(&self, mode: &str) {
        warn!("recovering poisoned lock on {} acquisition", mode);

        self.0.clear_poison();
    }
}

impl<T: fmt::Debug> fmt::Debug for RecoverableRwLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

//  mod tests
