//! Dataset loading and filter-option indexing.
//!
//! This module turns a parsed CSV into the two things every session needs:
//! - the immutable `Dataset`
//! - the `FilterOptions` (distinct values per filterable column)

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Load the movie CSV and compute its filter options.
///
/// This is the main entry point for loading data.
pub fn load_dataset(path: &Path) -> Result<(Dataset, FilterOptions)> {
    let dataset = Dataset::load_from_file(path)?;
    let options = FilterOptions::from_dataset(&dataset);
    Ok((dataset, options))
}

impl Dataset {
    /// Parse the CSV at `path` into a dataset, keeping file order.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let movies = parser::parse_movies(path)?;
        info!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Dataset::from_movies(movies))
    }
}

impl FilterOptions {
    /// Collect the distinct non-null values of Genre, Release_Date and
    /// Vote_Average.
    ///
    /// The three columns are independent, so they are scanned in parallel
    /// with `rayon::join`.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (genres, (release_values, vote_values)) = rayon::join(
            || distinct_genres(dataset),
            || {
                rayon::join(
                    || distinct_release_values(dataset),
                    || distinct_vote_values(dataset),
                )
            },
        );

        debug!(
            "Filter options: {} genres, {} release values, {} vote values",
            genres.len(),
            release_values.len(),
            vote_values.len()
        );

        Self {
            genres,
            release_values,
            vote_values,
        }
    }
}

/// Lexicographically ascending
fn distinct_genres(dataset: &Dataset) -> Vec<String> {
    let genres: BTreeSet<&str> = dataset
        .iter()
        .filter_map(|movie| movie.genre.as_deref())
        .collect();
    genres.into_iter().map(str::to_string).collect()
}

/// Descending, so the most recent release comes first
fn distinct_release_values(dataset: &Dataset) -> Vec<CategoryValue> {
    let values: BTreeSet<&CategoryValue> = dataset
        .iter()
        .filter_map(|movie| movie.release_date.as_ref())
        .collect();
    values.into_iter().rev().cloned().collect()
}

/// Ascending
fn distinct_vote_values(dataset: &Dataset) -> Vec<CategoryValue> {
    let values: BTreeSet<&CategoryValue> = dataset
        .iter()
        .filter_map(|movie| movie.vote_average.as_ref())
        .collect();
    values.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: Option<&str>, release: Option<i64>, vote: Option<&str>) -> Movie {
        Movie {
            title: title.to_string(),
            genre: genre.map(str::to_string),
            release_date: release.map(CategoryValue::Integer),
            vote_average: vote.map(CategoryValue::from),
            popularity: 1.0,
            vote_count: None,
        }
    }

    #[test]
    fn test_filter_options_ordering() {
        let dataset = Dataset::from_movies(vec![
            movie("A", Some("Drama"), Some(2019), Some("popular")),
            movie("B", Some("Action"), Some(2021), Some("average")),
            movie("C", Some("Drama"), Some(2020), Some("popular")),
            movie("D", Some("Comedy"), Some(2021), Some("below_avg")),
        ]);

        let options = FilterOptions::from_dataset(&dataset);

        assert_eq!(options.genres, vec!["Action", "Comedy", "Drama"]);
        assert_eq!(
            options.release_values,
            vec![
                CategoryValue::Integer(2021),
                CategoryValue::Integer(2020),
                CategoryValue::Integer(2019),
            ]
        );
        assert_eq!(
            options.vote_values,
            vec![
                CategoryValue::from("average"),
                CategoryValue::from("below_avg"),
                CategoryValue::from("popular"),
            ]
        );
    }

    #[test]
    fn test_nulls_are_excluded_from_options() {
        let dataset = Dataset::from_movies(vec![
            movie("A", None, None, None),
            movie("B", Some("Action"), Some(2020), Some("popular")),
        ]);

        let options = FilterOptions::from_dataset(&dataset);

        assert_eq!(options.genres, vec!["Action"]);
        assert_eq!(options.release_values, vec![CategoryValue::Integer(2020)]);
        assert_eq!(options.vote_values, vec![CategoryValue::from("popular")]);
    }

    #[test]
    fn test_pandas_null_markers_are_excluded_from_options() {
        let input = "\
Title,Genre,Release_Date,Vote_Average,Popularity,Vote_Count
A,#N/A,<NA>,n/a,1.0,1
B,n/a,#NA,-nan,2.0,2
C,Action,2020,popular,3.0,3
";
        let movies = parser::parse_movies_from_reader(input.as_bytes(), "movies.csv").unwrap();
        let options = FilterOptions::from_dataset(&Dataset::from_movies(movies));

        assert_eq!(options.genres, vec!["Action"]);
        assert_eq!(options.release_values, vec![CategoryValue::Integer(2020)]);
        assert_eq!(options.vote_values, vec![CategoryValue::from("popular")]);
    }

    #[test]
    fn test_empty_dataset_has_no_options() {
        let options = FilterOptions::from_dataset(&Dataset::default());
        assert!(options.is_empty());
        assert!(options.genres.is_empty());
    }

    #[test]
    fn test_load_dataset() {
        // Requires the cleaned dataset; place it at the workspace root.
        let path = Path::new("../../cleaned_movies.csv");

        if path.exists() {
            let (dataset, options) = load_dataset(path).unwrap();
            assert!(!dataset.is_empty());
            assert!(!options.genres.is_empty());
        }
    }
}
