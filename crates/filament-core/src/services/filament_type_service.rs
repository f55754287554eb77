//! Filament type service - thin facade over the type repository.

use std::sync::Arc;

use crate::domain::FilamentType;
use crate::ports::{CoreError, FilamentTypeRepository};

/// Service for filament type operations.
pub struct FilamentTypeService {
    repo: Arc<dyn FilamentTypeRepository>,
}

impl FilamentTypeService {
    /// Create a new filament type service with the given repository.
    pub fn new(repo: Arc<dyn FilamentTypeRepository>) -> Self {
        Self { repo }
    }

    /// All types, ordered by manufacturer then name.
    ///
    /// Ordering is byte-wise and case-sensitive ("Zeta" sorts before
    /// "alpha"). Equal keys keep their stored order.
    pub fn get_all_filament_types(&self) -> Result<Vec<FilamentType>, CoreError> {
        self.repo
            .find_all()
            .map(|mut types| {
                types.sort_by(|a, b| {
                    a.manufacturer
                        .cmp(&b.manufacturer)
                        .then_with(|| a.name.cmp(&b.name))
                });
                types
            })
            .map_err(CoreError::from)
    }

    /// Get a type by id.
    pub fn get_filament_type_by_id(&self, id: i64) -> Result<FilamentType, CoreError> {
        self.repo.find_by_id(id).map_err(CoreError::from)
    }

    /// Add a type; the stored copy carries the assigned id.
    pub fn add_filament_type(&self, filament_type: FilamentType) -> Result<FilamentType, CoreError> {
        self.repo.add(filament_type).map_err(CoreError::from)
    }

    /// Replace a type by id.
    pub fn update_filament_type(
        &self,
        filament_type: FilamentType,
    ) -> Result<FilamentType, CoreError> {
        self.repo.update(filament_type).map_err(CoreError::from)
    }

    /// Delete a type by id.
    pub fn delete_filament_type(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_by_id(id).map_err(CoreError::from)
    }
}
