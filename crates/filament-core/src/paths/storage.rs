//! Collection file locations.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// File name of the spool collection inside the data root.
pub const DEFAULT_FILAMENTS_FILE: &str = "filaments.json";

/// File name of the filament type collection inside the data root.
pub const DEFAULT_FILAMENT_TYPES_FILE: &str = "filament-types.json";

/// Environment variable overriding the spool collection file.
pub(super) const FILAMENTS_PATH_ENV: &str = "FILAMENT_CONFIG_PATH";

/// Environment variable overriding the filament type collection file.
pub(super) const FILAMENT_TYPES_PATH_ENV: &str = "FILAMENT_TYPES_PATH";

/// Path of the spool collection file.
///
/// `FILAMENT_CONFIG_PATH` wins over `<data root>/filaments.json`.
pub fn filaments_path() -> Result<PathBuf, PathError> {
    resolve_file(FILAMENTS_PATH_ENV, DEFAULT_FILAMENTS_FILE)
}

/// Path of the filament type collection file.
///
/// `FILAMENT_TYPES_PATH` wins over `<data root>/filament-types.json`.
pub fn filament_types_path() -> Result<PathBuf, PathError> {
    resolve_file(FILAMENT_TYPES_PATH_ENV, DEFAULT_FILAMENT_TYPES_FILE)
}

/// Location of the `.env` file that may hold persisted overrides.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

fn resolve_file(env_key: &str, default_name: &str) -> Result<PathBuf, PathError> {
    match env::var(env_key) {
        Ok(raw) if !raw.trim().is_empty() => normalize_user_path(&raw),
        _ => Ok(data_root()?.join(default_name)),
    }
}
