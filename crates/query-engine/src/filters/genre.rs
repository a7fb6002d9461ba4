//! Keeps movies of exactly one genre.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps rows whose `Genre` equals the selected genre.
///
/// Matching is exact and case-sensitive; "action" does not select "Action".
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.genre.as_deref() == Some(self.genre.as_str())
    }
}
