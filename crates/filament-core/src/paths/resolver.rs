//! Resolve every path in one call.

use std::path::{Path, PathBuf};

use super::{PathError, data_root, filament_types_path, filaments_path, normalize_user_path};

/// All resolved paths captured in a single struct.
///
/// Bootstrap builds the store from this, and the `paths` command prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Spool collection file.
    pub filaments_file: PathBuf,
    /// Filament type collection file.
    pub filament_types_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_overrides(None, None)
    }

    /// Resolve with explicit per-invocation file overrides.
    ///
    /// Overrides win over environment variables and the data root defaults.
    pub fn resolve_with_overrides(
        filaments_file: Option<&str>,
        filament_types_file: Option<&str>,
    ) -> Result<Self, PathError> {
        let filaments_file = match filaments_file {
            Some(raw) => normalize_user_path(raw)?,
            None => filaments_path()?,
        };
        let filament_types_file = match filament_types_file {
            Some(raw) => normalize_user_path(raw)?,
            None => filament_types_path()?,
        };

        Ok(Self {
            data_root: data_root()?,
            filaments_file,
            filament_types_file,
        })
    }

    /// Both collections inside `dir`, using the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_root: dir.to_path_buf(),
            filaments_file: dir.join(super::DEFAULT_FILAMENTS_FILE),
            filament_types_file: dir.join(super::DEFAULT_FILAMENT_TYPES_FILE),
        }
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "filaments_file = {}", self.filaments_file.display())?;
        write!(
            f,
            "filament_types_file = {}",
            self.filament_types_file.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn resolve_returns_consistent_paths() {
        // Lock keeps env-mutating tests from interleaving with this one
        let _guard = ENV_LOCK.lock().unwrap();

        let first = ResolvedPaths::resolve().expect("first resolve");
        let second = ResolvedPaths::resolve().expect("second resolve");

        assert_eq!(first, second, "path resolution should be deterministic");
    }

    #[test]
    fn overrides_win() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let _root = EnvVarGuard::set("FILAMENT_DATA_DIR", temp.path().to_string_lossy().as_ref());
        let custom = temp.path().join("custom-types.json");

        let paths =
            ResolvedPaths::resolve_with_overrides(None, Some(custom.to_string_lossy().as_ref()))
                .unwrap();

        assert_eq!(paths.filament_types_file, custom);
        assert_eq!(paths.data_root, temp.path());
    }

    #[test]
    fn display_format_is_parseable() {
        let paths = ResolvedPaths::in_dir(Path::new("/data/filament"));
        let output = paths.to_string();

        assert!(output.contains("data_root = /data/filament"));
        assert!(output.contains("filaments_file = /data/filament/filaments.json"));
        assert!(output.contains("filament_types_file = /data/filament/filament-types.json"));
    }
}
