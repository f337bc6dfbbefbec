use super::ValidationError;
use crate::domain::Table;
use std::path::Path;

/// Every required column must be present; the first absent one is reported.
pub fn require_columns<S: AsRef<str>>(
    artifact: &Path,
    table: &Table,
    required: &[S],
) -> Result<(), ValidationError> {
    match required.iter().find(|c| !table.has_column(c.as_ref())) {
        None => Ok(()),
        Some(column) => Err(ValidationError::MissingColumn {
            artifact: artifact.to_path_buf(),
            column: column.as_ref().to_string(),
        }),
    }
}
