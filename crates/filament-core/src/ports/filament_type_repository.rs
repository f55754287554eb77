//! Filament type repository trait definition.

use super::RepositoryError;
use crate::domain::FilamentType;

/// Repository for filament type persistence.
///
/// Same contract as [`FilamentRepository`](super::FilamentRepository), with
/// its own independent id sequence.
#[cfg_attr(test, mockall::automock)]
pub trait FilamentTypeRepository: Send + Sync {
    /// List all types in stored order. An absent collection is empty.
    fn find_all(&self) -> Result<Vec<FilamentType>, RepositoryError>;

    /// Get a type by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no type has that id.
    fn find_by_id(&self, id: i64) -> Result<FilamentType, RepositoryError>;

    /// Replace the stored collection with `types`, preserving order.
    fn save(&self, types: &[FilamentType]) -> Result<(), RepositoryError>;

    /// Append a type under a freshly assigned id, ignoring the one given.
    fn add(&self, filament_type: FilamentType) -> Result<FilamentType, RepositoryError>;

    /// Replace the type with the same id; an unknown id is a silent no-op.
    fn update(&self, filament_type: FilamentType) -> Result<FilamentType, RepositoryError>;

    /// Remove the type with `id`. Spools referencing it are left alone.
    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
