//  Lints
#![allow(clippy::module_inception)]
#![forbid(unsafe_code)]

//! #   The Lockset Library
//!
//! A generic, mutable set with two interchangeable flavors:
//! -   The `UnsafeSet`: a hash set without any internal synchronization.
//! -   The `SafeSet`: the very same set, guarded by a reader/writer lock.
//!
//! Both flavors implement the `Set` trait, so that code generic over the
//! flavor can be written once and instantiated with either.
//!
//! "Unsafe" is meant as in "unsynchronized": neither flavor contains a single
//! line of `unsafe` code.

pub mod set;

mod utils;

use self::utils::lock;

#[cfg(test)]
use self::utils::tester;
