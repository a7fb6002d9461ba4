//! Parser for the movie CSV file.
//!
//! Expected header (extra columns are ignored, order does not matter):
//! `Title,Genre,Release_Date,Vote_Average,Popularity,Vote_Count`
//!
//! Rows are read with the `csv` crate and deserialized through serde into a
//! loosely typed `RawMovieRecord`, then converted into a `Movie` with
//! line-numbered errors.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// A CSV row before type conversion.
///
/// Every field is optional here so that null handling lives in one place
/// (`into_movie`) instead of surfacing as serde errors.
#[derive(Debug, Deserialize)]
struct RawMovieRecord {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Release_Date")]
    release_date: Option<String>,
    #[serde(rename = "Vote_Average")]
    vote_average: Option<String>,
    #[serde(rename = "Popularity")]
    popularity: Option<String>,
    #[serde(rename = "Vote_Count")]
    vote_count: Option<String>,
}

impl RawMovieRecord {
    fn into_movie(self, file: &str, line: u64) -> Result<Movie> {
        let parse_error = |reason: String| DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason,
        };

        let title = non_null(self.title).ok_or_else(|| parse_error("Missing Title".to_string()))?;

        let popularity = non_null(self.popularity)
            .ok_or_else(|| parse_error("Missing Popularity".to_string()))?;
        let popularity = popularity
            .parse::<f64>()
            .map_err(|e| parse_error(format!("Invalid Popularity '{}': {}", popularity, e)))?;

        // Vote_Count is informational, so a bad cell drops the count, not the row
        let vote_count = non_null(self.vote_count).and_then(|raw| {
            let count = parse_vote_count(&raw);
            if count.is_none() {
                warn!("Ignoring invalid Vote_Count '{}' at line {} in {}", raw, line, file);
            }
            count
        });

        Ok(Movie {
            title,
            genre: non_null(self.genre),
            release_date: self.release_date.as_deref().and_then(CategoryValue::parse),
            vote_average: self.vote_average.as_deref().and_then(CategoryValue::parse),
            popularity,
            vote_count,
        })
    }
}

/// Drop null markers, keep everything else trimmed
fn non_null(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !is_null_cell(s))
        .map(|s| s.trim().to_string())
}

/// Vote counts are whole numbers, but a column that once held nulls is often
/// written out as floats ("1234.0").
fn parse_vote_count(raw: &str) -> Option<u64> {
    if let Ok(count) = raw.parse::<u64>() {
        return Some(count);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Parse the movie CSV at `path`.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movies_from_reader(file, &source)
}

/// Parse movie rows from any reader.
///
/// `source` names the input in error messages.
pub fn parse_movies_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<Movie>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            file: source.to_string(),
            columns: missing,
        });
    }

    let mut movies = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawMovieRecord = record.deserialize(Some(&headers))?;
        movies.push(raw.into_movie(source, line)?);
    }

    Ok(movies)
}
