//! Internal utilities.

pub mod lock;

#[cfg(test)]
pub mod tester;
