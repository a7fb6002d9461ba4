//! Keeps movies with one release key.

use crate::traits::Filter;
use data_loader::{CategoryValue, Movie};

/// Keeps rows whose `Release_Date` equals the selected value.
///
/// The value is compared as an opaque category, never as a date range.
pub struct ReleaseFilter {
    release: CategoryValue,
}

impl ReleaseFilter {
    pub fn new(release: CategoryValue) -> Self {
        Self { release }
    }
}

impl Filter for ReleaseFilter {
    fn name(&self) -> &str {
        "ReleaseFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.release_date.as_ref() == Some(&self.release)
    }
}
