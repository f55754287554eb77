//! Directory creation for collection files.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Ensure the directory that will contain `file` exists.
///
/// Creates missing parents. The file itself is never created: a missing
/// collection file reads as an empty collection.
pub fn ensure_parent_dir(file: &Path) -> Result<(), PathError> {
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if parent.exists() {
        if !parent.is_dir() {
            return Err(PathError::NotADirectory(parent.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|e| PathError::CreateFailed {
        path: parent.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %parent.display(), "created data directory");
    Ok(())
}
