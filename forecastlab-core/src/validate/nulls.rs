use super::ValidationError;
use crate::domain::Table;
use std::path::Path;

/// Zero missing cells across the whole table.
pub fn require_no_nulls(artifact: &Path, table: &Table) -> Result<(), ValidationError> {
    match table.first_null() {
        None => Ok(()),
        Some((row, column)) => Err(ValidationError::NullValues {
            artifact: artifact.to_path_buf(),
            count: table.null_count(),
            row: row.to_string(),
            column: column.to_string(),
        }),
    }
}
