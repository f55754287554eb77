//! Filament repository trait definition.
//!
//! This port defines the interface for spool persistence. Implementations
//! handle all storage details internally.

use super::RepositoryError;
use crate::domain::Filament;

/// Repository for spool persistence.
///
/// Every call works on the whole collection: there is no caching, so each
/// operation observes whatever is currently stored.
#[cfg_attr(test, mockall::automock)]
pub trait FilamentRepository: Send + Sync {
    /// List all spools in stored order. An absent collection is empty.
    fn find_all(&self) -> Result<Vec<Filament>, RepositoryError>;

    /// Get a spool by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no spool has that id.
    fn find_by_id(&self, id: i64) -> Result<Filament, RepositoryError>;

    /// Replace the stored collection with `filaments`, preserving order.
    fn save(&self, filaments: &[Filament]) -> Result<(), RepositoryError>;

    /// Append a spool under a freshly assigned id.
    ///
    /// The id on `filament` is ignored. Returns the stored spool.
    fn add(&self, filament: Filament) -> Result<Filament, RepositoryError>;

    /// Replace the spool with the same id.
    ///
    /// An unknown id leaves the collection unchanged and still succeeds.
    fn update(&self, filament: Filament) -> Result<Filament, RepositoryError>;

    /// Remove the spool with `id`. Removing an unknown id is not an error.
    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
