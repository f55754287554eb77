//! JSON file implementation of the filament type repository port.

use filament_core::{FilamentType, FilamentTypeRepository, RepositoryError};

use super::JsonFileRepository;

/// Filament type collection stored in `filament-types.json`.
pub type FileFilamentTypeRepository = JsonFileRepository<FilamentType>;

impl FilamentTypeRepository for JsonFileRepository<FilamentType> {
    fn find_all(&self) -> Result<Vec<FilamentType>, RepositoryError> {
        Self::find_all(self)
    }

    fn find_by_id(&self, id: i64) -> Result<FilamentType, RepositoryError> {
        Self::find_by_id(self, id)
    }

    fn save(&self, filament_types: &[FilamentType]) -> Result<(), RepositoryError> {
        Self::save(self, filament_types)
    }

    fn add(&self, filament_type: FilamentType) -> Result<FilamentType, RepositoryError> {
        Self::add(self, filament_type)
    }

    fn update(&self, filament_type: FilamentType) -> Result<FilamentType, RepositoryError> {
        Self::update(self, filament_type)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        Self::delete_by_id(self, id)
    }
}
