//! Core domain types for the movie dataset.
//!
//! This module defines the data structures shared by the loader, the query
//! engine and the CLI:
//! - `CategoryValue`: an opaque, ordered cell used as a filter key
//! - `Movie`: one row of the CSV
//! - `Dataset`: the immutable, ordered collection of rows
//! - `FilterOptions`: the distinct values offered for each filter

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Column names
// =============================================================================

pub const TITLE: &str = "Title";
pub const GENRE: &str = "Genre";
pub const RELEASE_DATE: &str = "Release_Date";
pub const VOTE_AVERAGE: &str = "Vote_Average";
pub const POPULARITY: &str = "Popularity";
pub const VOTE_COUNT: &str = "Vote_Count";

/// Every column the loader requires in the header row.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    TITLE,
    GENRE,
    RELEASE_DATE,
    VOTE_AVERAGE,
    POPULARITY,
    VOTE_COUNT,
];

/// Cell contents treated as missing values (pandas' default `na_values`).
const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if a raw cell holds no value.
pub fn is_null_cell(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULL_MARKERS.contains(&trimmed)
}

// =============================================================================
// CategoryValue
// =============================================================================

/// A categorical cell such as a release year or a vote bucket.
///
/// The value is never interpreted (a release "date" is not a calendar date);
/// it only needs equality for filtering and an ordering for the option lists.
/// Numbers sort numerically and before text.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CategoryValue {
    /// Classify a raw cell. Returns `None` for null cells.
    ///
    /// Integral floats that fit an `i64` are stored as `Integer`, so
    /// `"7.0"` and `"7"` name the same category.
    pub fn parse(raw: &str) -> Option<Self> {
        if is_null_cell(raw) {
            return None;
        }
        let s = raw.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Some(CategoryValue::Integer(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    return Some(CategoryValue::Integer(f as i64));
                }
                return Some(CategoryValue::Float(f));
            }
        }
        Some(CategoryValue::Text(s.to_string()))
    }

    fn rank(&self) -> u8 {
        match self {
            CategoryValue::Integer(_) | CategoryValue::Float(_) => 0,
            CategoryValue::Text(_) => 1,
        }
    }
}

impl From<i64> for CategoryValue {
    fn from(value: i64) -> Self {
        CategoryValue::Integer(value)
    }
}

impl From<i32> for CategoryValue {
    fn from(value: i32) -> Self {
        CategoryValue::Integer(i64::from(value))
    }
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        CategoryValue::Text(value.to_string())
    }
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryValue {}

impl PartialOrd for CategoryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CategoryValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use CategoryValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            // An integer and a float are never the same category, even when
            // the cast rounds them together.
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for CategoryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CategoryValue::Integer(i) => i.hash(state),
            CategoryValue::Float(f) => f.to_bits().hash(state),
            CategoryValue::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryValue::Integer(i) => write!(f, "{i}"),
            CategoryValue::Float(v) => write!(f, "{v}"),
            CategoryValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// =============================================================================
// Movie
// =============================================================================

/// One row of the movie CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub title: String,
    pub genre: Option<String>,
    /// Release key as found in the file (usually a year)
    pub release_date: Option<CategoryValue>,
    /// Vote bucket, either a number or a label such as "popular"
    pub vote_average: Option<CategoryValue>,
    /// Ranking key; no guaranteed range
    pub popularity: f64,
    /// Informational only, never used for filtering or ranking
    pub vote_count: Option<u64>,
}

// =============================================================================
// Dataset
// =============================================================================

/// The full movie table, in file order.
///
/// There are no mutators: once built, a `Dataset` is read-only and can be
/// shared between sessions behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: Vec<Movie>,
}

impl Dataset {
    /// Wrap already-parsed rows. Row order is preserved.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All rows, in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

// =============================================================================
// FilterOptions
// =============================================================================

/// Distinct non-null values of the three filterable columns.
///
/// These are the only values a selection widget should offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Sorted ascending (lexicographic)
    pub genres: Vec<String>,
    /// Sorted descending, newest first
    pub release_values: Vec<CategoryValue>,
    /// Sorted ascending
    pub vote_values: Vec<CategoryValue>,
}

impl FilterOptions {
    pub fn contains_genre(&self, genre: &str) -> bool {
        self.genres.binary_search_by(|g| g.as_str().cmp(genre)).is_ok()
    }

    pub fn contains_release(&self, release: &CategoryValue) -> bool {
        self.release_values
            .binary_search_by(|v| release.cmp(v))
            .is_ok()
    }

    pub fn contains_vote(&self, vote: &CategoryValue) -> bool {
        self.vote_values.binary_search(vote).is_ok()
    }

    /// True when at least one of the lists has nothing to offer
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() || self.release_values.is_empty() || self.vote_values.is_empty()
    }
}
