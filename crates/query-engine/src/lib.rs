//! Filtering, ranking and aggregation over a loaded movie dataset.
//!
//! This crate provides:
//! - Filter trait and the three equality filters (genre, release, vote)
//! - FilterPipeline for composing filters into a `FilteredView`
//! - Ranking: top-N and remaining rows by popularity, pie-chart shares
//! - QueryEngine, the per-session façade the presentation layer calls
//!
//! ## Architecture
//! A request flows one way:
//! 1. Filters keep rows matching the selection (dataset order preserved)
//! 2. Ranking sorts them by popularity, once
//! 3. The ranked rows are split into top-N / remaining and charted
//!
//! ## Example Usage
//! ```ignore
//! use query_engine::{ExploreSettings, QueryEngine, Selection};
//!
//! let engine = QueryEngine::load(Path::new("cleaned_movies.csv"))?;
//! let selection = Selection::parse("Action", "2020", "popular");
//!
//! let exploration = engine.explore(&selection, &ExploreSettings::default());
//! for movie in &exploration.top {
//!     println!("{} ({})", movie.title, movie.popularity);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod ranking;
pub mod engine;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::{filter, FilterPipeline, FilteredView};
pub use selection::Selection;
pub use ranking::{rank, rest, share_of, top_n, PopularityShares, RankedView, Share};
pub use engine::{ExploreSettings, Exploration, QueryEngine};
