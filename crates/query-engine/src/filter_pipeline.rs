//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters with
//! logical AND, the `FilteredView` it produces, and the `filter` entry point
//! used for a (genre, release, vote) selection.

use crate::filters::{GenreFilter, ReleaseFilter, VoteFilter};
use crate::selection::Selection;
use crate::traits::Filter;
use data_loader::{Dataset, Movie};
use serde::Serialize;

/// Rows of a dataset that passed a filter pipeline, in dataset order.
///
/// The view borrows from the dataset; it never copies or reorders rows.
/// An empty view is an ordinary result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Movie>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a Movie] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Movie> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<&'a Movie> {
        self.rows
    }
}

/// Chains multiple filters together; a row is kept only if every filter
/// accepts it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Action"))
///     .add_filter(ReleaseFilter::new(CategoryValue::Integer(2020)));
///
/// let view = pipeline.apply(&dataset);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The three equality filters for a selection.
    pub fn for_selection(selection: &Selection) -> Self {
        Self::new()
            .add_filter(GenreFilter::new(selection.genre.clone()))
            .add_filter(ReleaseFilter::new(selection.release.clone()))
            .add_filter(VoteFilter::new(selection.vote.clone()))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the dataset.
    ///
    /// Each stage only narrows the previous one, so dataset order survives.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        let mut current: Vec<&'a Movie> = dataset.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|movie| filter.matches(movie));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        FilteredView { rows: current }
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows matching the selection's genre, release value and vote bucket.
///
/// Pure and total: an unmatched value gives an empty view.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    FilterPipeline::for_selection(selection).apply(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::CategoryValue;

    fn movie(title: &str, genre: &str, release: i64, vote: i64) -> Movie {
        Movie {
            title: title.to_string(),
            genre: Some(genre.to_string()),
            release_date: Some(CategoryValue::Integer(release)),
            vote_average: Some(CategoryValue::Integer(vote)),
            popularity: 1.0,
            vote_count: Some(1),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_movies(vec![
            movie("A", "Action", 2020, 7),
            movie("B", "Drama", 2020, 7),
            movie("C", "Action", 2021, 7),
            movie("D", "Action", 2020, 7),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let dataset = dataset();
        let view = FilterPipeline::new().apply(&dataset);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_single_filter() {
        let dataset = dataset();
        let view = FilterPipeline::new()
            .add_filter(GenreFilter::new("Drama"))
            .apply(&dataset);

        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].title, "B");
    }

    #[test]
    fn test_selection_keeps_dataset_order() {
        let dataset = dataset();
        let view = filter(&dataset, &Selection::new("Action", 2020, 7));

        let titles: Vec<&str> = view.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "D"]);
    }

    #[test]
    fn test_unknown_selection_is_empty() {
        let dataset = dataset();
        let view = filter(&dataset, &Selection::new("Western", 1950, 3));
        assert!(view.is_empty());
    }
}
