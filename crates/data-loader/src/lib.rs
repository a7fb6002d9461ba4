//! # Data Loader Crate
//!
//! This crate loads the cleaned movie CSV into an immutable, in-memory
//! dataset and computes the values each filter may take.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, CategoryValue, Dataset, FilterOptions)
//! - **parser**: Parse the CSV into `Movie` rows
//! - **index**: Build the dataset and its distinct-value lists
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_dataset;
//! use std::path::Path;
//!
//! let (dataset, options) = load_dataset(Path::new("cleaned_movies.csv"))?;
//!
//! println!("{} movies, {} genres", dataset.len(), options.genres.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::load_dataset;
pub use types::{CategoryValue, Dataset, FilterOptions, Movie, REQUIRED_COLUMNS};
