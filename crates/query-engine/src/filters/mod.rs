//! Filter implementations for the query pipeline.
//!
//! Each filter is an exact-equality predicate on one column. A row whose
//! cell is null never matches, because null is not a selectable value.

pub mod genre;
pub mod release;
pub mod vote;

// Re-export for convenience
pub use genre::GenreFilter;
pub use release::ReleaseFilter;
pub use vote::VoteFilter;
