//! Composition utilities for building `AppCore` over JSON file repositories.
//!
//! This module wires concrete repositories into the core's `Repos` bundle.
//! It holds no domain logic.

use std::sync::Arc;

use filament_core::{AppCore, Repos, ResolvedPaths};

use crate::repositories::{FileFilamentRepository, FileFilamentTypeRepository};

/// Factory for repository instances backed by JSON files.
pub struct StoreFactory;

impl StoreFactory {
    /// Build both repositories from resolved paths.
    ///
    /// Nothing is read or created on disk; a missing file behaves as an
    /// empty collection until the first write.
    pub fn build_repos(paths: &ResolvedPaths) -> Repos {
        Repos::new(
            Self::filament_repository(paths),
            Self::filament_type_repository(paths),
        )
    }

    /// Build a complete `AppCore` from resolved paths.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = StoreFactory::build_repos(&paths);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(paths: &ResolvedPaths) -> AppCore {
        AppCore::new(Self::build_repos(paths))
    }

    /// Create the spool repository.
    pub fn filament_repository(paths: &ResolvedPaths) -> Arc<FileFilamentRepository> {
        Arc::new(FileFilamentRepository::new(&paths.filaments_file))
    }

    /// Create the filament type repository.
    pub fn filament_type_repository(paths: &ResolvedPaths) -> Arc<FileFilamentTypeRepository> {
        Arc::new(FileFilamentTypeRepository::new(&paths.filament_types_file))
    }
}

/// Scratch data directory for tests.
///
/// Both collection files live in a temporary directory that is removed when
/// the `TestStore` is dropped. The files are not created up front.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestStore {
    _dir: tempfile::TempDir,
    paths: ResolvedPaths,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestStore {
    /// Create an empty store in a fresh temporary directory.
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let paths = ResolvedPaths::in_dir(dir.path());
        Ok(Self { _dir: dir, paths })
    }

    /// Paths of the collection files.
    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    /// Fresh repositories over the store's files.
    pub fn repos(&self) -> Repos {
        StoreFactory::build_repos(&self.paths)
    }

    /// A fresh `AppCore` over the store's files.
    pub fn app_core(&self) -> AppCore {
        StoreFactory::build_app_core(&self.paths)
    }

    /// Write raw text to the spool collection file.
    pub fn write_filaments_raw(&self, contents: &str) -> anyhow::Result<()> {
        std::fs::write(&self.paths.filaments_file, contents)?;
        Ok(())
    }

    /// Write raw text to the filament type collection file.
    pub fn write_filament_types_raw(&self, contents: &str) -> anyhow::Result<()> {
        std::fs::write(&self.paths.filament_types_file, contents)?;
        Ok(())
    }
}
