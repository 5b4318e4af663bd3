//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod sort_policy;

pub use sort_policy::SortPolicy;
