//! Artifact loaders.

pub mod csv_table;
pub mod dates;
pub mod forecast;
pub mod price_series;
pub mod summary;

pub use forecast::load_forecast_series;
pub use price_series::load_price_series;
pub use summary::load_summary;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading an artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: expected {expected} header row(s), found {found}", .path.display())]
    MissingHeader {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{}: line {line} has {found} fields but the header has {expected}", .path.display())]
    RaggedRow {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("{}: {rows} data row(s) but no index label parses as a date (first: '{first_label}')", .path.display())]
    NoDatedRows {
        path: PathBuf,
        rows: usize,
        first_label: String,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: top-level JSON value is {found}, expected an object", .path.display())]
    NotARecord { path: PathBuf, found: &'static str },
}
