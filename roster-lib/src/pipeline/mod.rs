//! Pure row transforms.
//!
//! Each stage borrows its input and returns a new ordered subsequence (or
//! permutation) of references; rows themselves are never copied or mutated,
//! so recomputing the whole pipeline on every render is cheap and safe.

mod category;
mod search;
mod sort;

pub use category::{CategoryFilter, filter_by_category};
pub use search::search;
pub use sort::{SortState, sort_by_power};
