//! Keeps movies in one vote bucket.

use crate::traits::Filter;
use data_loader::{CategoryValue, Movie};

/// Keeps rows whose `Vote_Average` equals the selected bucket.
///
/// Buckets may be numeric (`7`) or labels (`"popular"`); either way this is
/// an equality test, not a threshold like "at least 7".
pub struct VoteFilter {
    vote: CategoryValue,
}

impl VoteFilter {
    pub fn new(vote: CategoryValue) -> Self {
        Self { vote }
    }
}

impl Filter for VoteFilter {
    fn name(&self) -> &str {
        "VoteFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.vote_average.as_ref() == Some(&self.vote)
    }
}
