//! Validators: one predicate per artifact invariant.
//!
//! Each validator returns `Ok(())` when the invariant holds and a
//! [`ValidationError`] naming the artifact and the violated condition
//! otherwise. Skipping on absent artifacts is the runner's concern.

pub mod columns;
pub mod existence;
pub mod nulls;
pub mod positivity;
pub mod summary_keys;

pub use columns::require_columns;
pub use existence::require_file;
pub use nulls::require_no_nulls;
pub use positivity::require_positive;
pub use summary_keys::{require_keys, require_sub_record_models};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing: {}", .path.display())]
    MissingArtifact { path: PathBuf },

    #[error("{} exists but is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("{} has {count} NaN value(s), first at row '{row}' column '{column}'", .artifact.display())]
    NullValues {
        artifact: PathBuf,
        count: usize,
        row: String,
        column: String,
    },

    #[error("{} missing column: {column}", .artifact.display())]
    MissingColumn { artifact: PathBuf, column: String },

    #[error("{} contains non-positive price values: {column} = {value} at row '{row}'", .artifact.display())]
    NonPositive {
        artifact: PathBuf,
        column: String,
        row: String,
        value: String,
    },

    #[error("Missing key in {}: {key}", .artifact.display())]
    MissingKey { artifact: PathBuf, key: String },

    #[error("{}: '{key}' is {found}, expected an object", .artifact.display())]
    NotASubRecord {
        artifact: PathBuf,
        key: String,
        found: &'static str,
    },

    #[error("{}: {model} {field} missing", .artifact.display())]
    MissingModel {
        artifact: PathBuf,
        field: String,
        model: String,
    },
}
