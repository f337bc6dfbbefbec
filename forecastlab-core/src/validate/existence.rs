use super::ValidationError;
use std::path::Path;

/// The artifact must exist and be a regular file.
pub fn require_file(path: &Path) -> Result<(), ValidationError> {
    if path.is_file() {
        Ok(())
    } else if path.exists() {
        Err(ValidationError::NotAFile {
            path: path.to_path_buf(),
        })
    } else {
        Err(ValidationError::MissingArtifact {
            path: path.to_path_buf(),
        })
    }
}
