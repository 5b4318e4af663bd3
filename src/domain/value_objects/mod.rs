//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod priority;
mod sort_mode;

pub use priority::Priority;
pub use sort_mode::SortMode;
