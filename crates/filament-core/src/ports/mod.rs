//! Port definitions (trait abstractions) for storage.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No file or serialization details in any signature
//! - Traits are minimal and CRUD-focused
//! - Every operation returns a `Result`; expected failures never panic

pub mod filament_repository;
pub mod filament_type_repository;

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub use filament_repository::FilamentRepository;
pub use filament_type_repository::FilamentTypeRepository;

#[cfg(test)]
pub use filament_repository::MockFilamentRepository;
#[cfg(test)]
pub use filament_type_repository::MockFilamentTypeRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives in
/// the core so that `AppCore` can accept it without depending on the store.
#[derive(Clone)]
pub struct Repos {
    /// Spool collection.
    pub filaments: Arc<dyn FilamentRepository>,
    /// Filament type collection.
    pub filament_types: Arc<dyn FilamentTypeRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        filaments: Arc<dyn FilamentRepository>,
        filament_types: Arc<dyn FilamentTypeRepository>,
    ) -> Self {
        Self {
            filaments,
            filament_types,
        }
    }
}

/// Errors raised by repository operations.
///
/// The `Display` text is the user-facing message; callers propagate it
/// unchanged.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the requested id exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The collection file exists but could not be read.
    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The collection file is not a valid JSON array of records.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The collection file (or its directory) could not be written.
    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// The highest stored id leaves no room for another record.
    #[error("Cannot add {entity}: highest id {max} leaves no free id")]
    IdsExhausted { entity: &'static str, max: i64 },

    /// The in-memory collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Not-found error for a record of type `T`.
    pub fn not_found<T: crate::domain::Record>(id: i64) -> Self {
        Self::NotFound {
            entity: T::ENTITY,
            id,
        }
    }

    /// True for the not-found case.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes and so on).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Stored data failed a precondition at use time.
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// True when the underlying failure is a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_not_found())
    }
}
