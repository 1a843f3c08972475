//! #   The Sets.
//!
//! The `UnsafeSet` is a thin veneer over the standard `HashSet`, restricted
//! to plain set semantics: membership, mutation, and snapshot iteration.
//!
//! The `SafeSet` owns an `UnsafeSet`, and guards every access to it with a
//! single reader/writer lock:
//!
//! -   Mutators (`insert`, `extend`, `remove`, `remove_all`, `clear`) acquire
//!     the lock in exclusive mode for the whole duration of the call.
//! -   Readers (`contains`, `len`, `is_empty`, `to_vec`, `snapshot`) acquire
//!     the lock in shared mode.
//!
//! No reference to the elements ever escapes the lock: any read returning
//! elements returns a copy, materialized while the lock is held.
//!
//! #   Example: basic
//!
//! ```
//! use lockset::set::UnsafeSet;
//!
//! let mut set: UnsafeSet<_> = UnsafeSet::new();
//!
//! assert!(set.insert(1));
//! assert!(!set.insert(1));
//!
//! set.extend([2, 3, 4]);
//! assert_eq!(4, set.len());
//!
//! assert!(set.remove(&4));
//! assert!(!set.remove(&4));
//!
//! set.remove_all([1, 2]);
//! assert_eq!(vec![3], set.to_vec());
//! ```
//!
//! #   Example: snapshots
//!
//! Both `to_vec` and `snapshot` produce point-in-time copies, which are not
//! affected by further updates of the set.
//!
//! ```
//! use lockset::set::SafeSet;
//!
//! let set: SafeSet<_> = SafeSet::new();
//! set.extend([1, 2, 3]);
//!
//! let slice = set.to_vec();
//! let snapshot = set.snapshot();
//!
//! set.clear();
//!
//! assert_eq!(3, slice.len());
//! assert_eq!(6, snapshot.sum::<i32>());
//! assert!(set.is_empty());
//! ```
//!
//! #   Example: sharing is caring
//!
//! The `SafeSet` mutates through a shared reference, and can therefore be
//! shared across threads as is.
//!
//! ```
//! use std::thread;
//!
//! use lockset::set::SafeSet;
//!
//! let set: SafeSet<_> = SafeSet::new();
//!
//! thread::scope(|scope| {
//!     for i in 0..4 {
//!         let set = &set;
//!         scope.spawn(move || set.insert(i));
//!     }
//! });
//!
//! assert_eq!(4, set.len());
//! ```
//!
//! #   Example: interchangeable
//!
//! ```
//! use lockset::set::{SafeSet, Set, UnsafeSet};
//!
//! fn fill<S: Set<u32>>(mut set: S) -> usize {
//!     set.insert(1);
//!     set.insert(2);
//!     set.insert(1);
//!     set.len()
//! }
//!
//! assert_eq!(2, fill(UnsafeSet::new()));
//! assert_eq!(2, fill(SafeSet::new()));
//! ```

pub mod iterator;

mod safe_set;
mod set;
mod snapshot;
mod unsafe_set;

pub use self::safe_set::SafeSet;
pub use self::set::Set;
pub use self::snapshot::Snapshot;
pub use self::unsafe_set::UnsafeSet;

use super::lock;

#[cfg(test)]
use super::tester;
