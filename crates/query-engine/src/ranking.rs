//! Popularity ranking and pie-chart shares.
//!
//! Every ranked view comes from the same stable sort (popularity descending,
//! ties in dataset order), so `top_n(view, k)` followed by `rest(view, k)`
//! is exactly the ranked sequence: no gaps, no overlaps.

use crate::filter_pipeline::FilteredView;
use data_loader::Movie;
use serde::Serialize;

/// Sort rows by popularity, highest first.
///
/// `sort_by` is stable, so equal popularities keep their incoming order.
pub(crate) fn sort_by_popularity(rows: &mut [&Movie]) {
    rows.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
}

/// A filtered view ordered by popularity, highest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedView<'a> {
    rows: Vec<&'a Movie>,
}

impl<'a> RankedView<'a> {
    pub fn rows(&self) -> &[&'a Movie] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `min(n, len)` rows
    pub fn top(&self, n: usize) -> &[&'a Movie] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Rows from position `skip` to the end; empty when `skip >= len`
    pub fn rest(&self, skip: usize) -> &[&'a Movie] {
        self.rows.get(skip..).unwrap_or(&[])
    }

    /// `(top(k), rest(k))` from one sort
    pub fn split_at(&self, k: usize) -> (&[&'a Movie], &[&'a Movie]) {
        self.rows.split_at(k.min(self.rows.len()))
    }

    pub fn into_rows(self) -> Vec<&'a Movie> {
        self.rows
    }
}

/// Rank a filtered view by popularity.
pub fn rank<'a>(view: &FilteredView<'a>) -> RankedView<'a> {
    let mut rows = view.rows().to_vec();
    sort_by_popularity(&mut rows);
    RankedView { rows }
}

/// The `n` most popular rows of `view`, highest first.
pub fn top_n<'a>(view: &FilteredView<'a>, n: usize) -> Vec<&'a Movie> {
    rank(view).top(n).to_vec()
}

/// Everything after the first `skip` rows of the ranked view.
pub fn rest<'a>(view: &FilteredView<'a>, skip: usize) -> Vec<&'a Movie> {
    rank(view).rest(skip).to_vec()
}

// =============================================================================
// Shares
// =============================================================================

/// One pie slice: a movie and its share of the subset's total popularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub title: String,
    pub popularity: f64,
    /// Percentage in `[0, 100]` when every popularity is non-negative
    pub percentage: f64,
}

/// Slices for a popularity pie chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopularityShares {
    pub slices: Vec<Share>,
    pub total_popularity: f64,
}

impl PopularityShares {
    /// False when there is nothing to draw: no rows, or a total popularity
    /// that is not strictly positive. Percentages are all zero in that case
    /// and the caller should show a "no data" notice instead of a chart.
    pub fn has_data(&self) -> bool {
        !self.slices.is_empty() && self.total_popularity > 0.0 && self.total_popularity.is_finite()
    }
}

/// Share of total popularity for the first `limit` rows of `rows`.
///
/// `rows` is expected to be ranked already (e.g. a `top_n` result), so the
/// subset is the `limit` most popular movies.
pub fn share_of(rows: &[&Movie], limit: usize) -> PopularityShares {
    let subset = &rows[..limit.min(rows.len())];
    let total_popularity: f64 = subset.iter().map(|movie| movie.popularity).sum();
    let drawable = total_popularity > 0.0 && total_popularity.is_finite();

    let slices = subset
        .iter()
        .map(|movie| Share {
            title: movie.title.clone(),
            popularity: movie.popularity,
            percentage: if drawable {
                movie.popularity / total_popularity * 100.0
            } else {
                0.0
            },
        })
        .collect();

    PopularityShares {
        slices,
        total_popularity,
    }
}
