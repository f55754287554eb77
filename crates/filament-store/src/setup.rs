//! Storage setup.
//!
//! Entry points call [`setup_storage`] with the resolved paths before
//! building repositories.

use anyhow::{Context, Result};
use filament_core::ResolvedPaths;
use filament_core::paths::ensure_parent_dir;

/// Make sure the directories holding both collection files exist.
///
/// The collection files themselves are left alone; a missing file reads as
/// an empty collection and is created by the first write.
///
/// # Example
///
/// ```rust,no_run
/// use filament_core::ResolvedPaths;
/// use filament_store::{StoreFactory, setup_storage};
///
/// # fn example() -> anyhow::Result<()> {
/// let paths = ResolvedPaths::resolve()?;
/// setup_storage(&paths)?;
/// let repos = StoreFactory::build_repos(&paths);
/// # Ok(())
/// # }
/// ```
pub fn setup_storage(paths: &ResolvedPaths) -> Result<()> {
    for file in [&paths.filaments_file, &paths.filament_types_file] {
        ensure_parent_dir(file)
            .with_context(|| format!("preparing storage for {}", file.display()))?;
    }
    tracing::debug!(data_root = %paths.data_root.display(), "storage ready");
    Ok(())
}
