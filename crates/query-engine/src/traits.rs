//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible row predicates to be applied to the dataset.

use data_loader::Movie;

/// A single row predicate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters are pure: `matches` never fails and never mutates, so a filter
/// can be shared between sessions (`Send + Sync`).
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` passes this filter.
    fn matches(&self, movie: &Movie) -> bool;
}
