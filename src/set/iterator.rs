//! The iterators over the sets.
//!
//! The `Iter` and `IntoIter` iterators are only available on the `UnsafeSet`,
//! as they either borrow or consume the backing table.
//!
//! The `Snapshot` iterator is available on both flavors, and never refers to
//! the backing table.

pub use super::snapshot::Snapshot;
pub use super::unsafe_set::{IntoIter, Iter};
