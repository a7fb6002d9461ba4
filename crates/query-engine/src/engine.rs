//! # Query Engine
//!
//! The session-facing façade over a loaded dataset. One interaction is one
//! call:
//! 1. Filter the dataset by the selection
//! 2. Rank the filtered rows by popularity
//! 3. Split them into top-N and remaining rows
//! 4. Compute pie-chart shares for the most popular rows
//!
//! The dataset sits behind an `Arc` and is never mutated, so every session
//! can hold its own clone of the engine without locking.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use data_loader::{Dataset, FilterOptions, Movie};

use crate::filter_pipeline::{self, FilteredView};
use crate::ranking::{self, PopularityShares};
use crate::selection::Selection;

/// How many rows the top-N table and the pie chart show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExploreSettings {
    /// Size of the top-N view (default: 3)
    pub top: usize,
    /// Number of pie slices (default: 5)
    pub chart_limit: usize,
}

impl ExploreSettings {
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn with_chart_limit(mut self, chart_limit: usize) -> Self {
        self.chart_limit = chart_limit;
        self
    }
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            top: 3,
            chart_limit: 5,
        }
    }
}

/// Every derived view for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct Exploration<'a> {
    pub selection: Selection,
    /// Matching rows in dataset order
    pub filtered: Vec<&'a Movie>,
    /// The `top` most popular matching rows
    pub top: Vec<&'a Movie>,
    /// The matching rows after `top`, same ranking
    pub remaining: Vec<&'a Movie>,
    /// Pie-chart shares of the `chart_limit` most popular rows
    pub shares: PopularityShares,
}

impl Exploration<'_> {
    /// True when the selection matched nothing
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Read-only query access to a dataset.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
    options: Arc<FilterOptions>,
}

impl QueryEngine {
    /// Create an engine, computing the filter options from the dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        Self::with_options(dataset, options)
    }

    /// Create an engine from options that were already computed.
    pub fn with_options(dataset: Arc<Dataset>, options: FilterOptions) -> Self {
        Self {
            dataset,
            options: Arc::new(options),
        }
    }

    /// Load the CSV at `path` and build an engine over it.
    pub fn load(path: &Path) -> data_loader::Result<Self> {
        let (dataset, options) = data_loader::load_dataset(path)?;
        Ok(Self::with_options(Arc::new(dataset), options))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// First offered value of every filter, if the dataset offers any.
    pub fn default_selection(&self) -> Option<Selection> {
        Selection::default_for(&self.options)
    }

    /// Rows matching the selection, in dataset order.
    ///
    /// A selection outside the offered values is logged and yields an empty
    /// view; it is never an error.
    #[instrument(skip_all, fields(selection = %selection))]
    pub fn filter(&self, selection: &Selection) -> FilteredView<'_> {
        if !selection.is_offered_by(&self.options) {
            warn!("Selection {} is not among the offered filter values", selection);
        }
        let view = filter_pipeline::filter(&self.dataset, selection);
        debug!("{} of {} movies match", view.len(), self.dataset.len());
        view
    }

    /// Filter, rank, split and chart in one pass.
    pub fn explore(&self, selection: &Selection, settings: &ExploreSettings) -> Exploration<'_> {
        let view = self.filter(selection);
        let ranked = ranking::rank(&view);
        let (top, remaining) = ranked.split_at(settings.top);
        let shares = ranking::share_of(ranked.rows(), settings.chart_limit);

        Exploration {
            selection: selection.clone(),
            top: top.to_vec(),
            remaining: remaining.to_vec(),
            shares,
            filtered: view.into_rows(),
        }
    }

    /// Case-insensitive title search, most popular first.
    ///
    /// Exact title matches come before substring matches.
    #[instrument(skip(self))]
    pub fn search(&self, title: &str, limit: usize) -> Vec<&Movie> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for movie in self.dataset.iter() {
            let haystack = movie.title.to_lowercase();
            if haystack == needle {
                exact.push(movie);
            } else if haystack.contains(&needle) {
                partial.push(movie);
            }
        }
        ranking::sort_by_popularity(&mut exact);
        ranking::sort_by_popularity(&mut partial);

        exact.extend(partial);
        exact.truncate(limit);
        debug!("Search for '{}' found {} movies", title, exact.len());
        exact
    }
}
