//! Error types for the data-loader crate.
//!
//! Every failure here is fatal for the caller: without a dataset there is
//! nothing to filter or rank, so the binary reports the error and exits.

use thiserror::Error;

/// Errors that can occur while loading the movie CSV.
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (ragged rows, bad quoting, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks one or more of the required columns
    #[error("Missing required columns in {file}: {}", columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    /// A row in the data file couldn't be parsed
    ///
    /// Stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
