//! The user's filter selection: one genre, one release value, one vote bucket.

use data_loader::{CategoryValue, FilterOptions};
use serde::Serialize;
use std::fmt;

/// A (genre, release, vote) triple.
///
/// Values are expected to come from [`FilterOptions`], but nothing breaks if
/// they don't: an unknown value simply matches no rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub genre: String,
    pub release: CategoryValue,
    pub vote: CategoryValue,
}

impl Selection {
    pub fn new(
        genre: impl Into<String>,
        release: impl Into<CategoryValue>,
        vote: impl Into<CategoryValue>,
    ) -> Self {
        Self {
            genre: genre.into(),
            release: release.into(),
            vote: vote.into(),
        }
    }

    /// Build a selection from raw text, classifying the release and vote
    /// values the same way the loader classifies CSV cells.
    ///
    /// `"2020"` therefore selects the integer release 2020 and `"7.0"`
    /// selects vote bucket 7.
    pub fn parse(genre: &str, release: &str, vote: &str) -> Self {
        Self {
            genre: genre.trim().to_string(),
            release: parse_value(release),
            vote: parse_value(vote),
        }
    }

    /// The selection a fresh dashboard starts with: the first offered value
    /// of every list. `None` if any list is empty.
    pub fn default_for(options: &FilterOptions) -> Option<Self> {
        Some(Self {
            genre: options.genres.first()?.clone(),
            release: options.release_values.first()?.clone(),
            vote: options.vote_values.first()?.clone(),
        })
    }

    /// Whether every field is one of the offered values
    pub fn is_offered_by(&self, options: &FilterOptions) -> bool {
        options.contains_genre(&self.genre)
            && options.contains_release(&self.release)
            && options.contains_vote(&self.vote)
    }
}

/// Blank input has no category of its own; keep it as text so it matches
/// nothing instead of being rejected.
fn parse_value(raw: &str) -> CategoryValue {
    CategoryValue::parse(raw).unwrap_or_else(|| CategoryValue::Text(raw.trim().to_string()))
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.genre, self.release, self.vote)
    }
}
