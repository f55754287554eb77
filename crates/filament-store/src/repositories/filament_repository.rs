//! JSON file implementation of the spool repository port.

use filament_core::{Filament, FilamentRepository, RepositoryError};

use super::JsonFileRepository;

/// Spool collection stored in `filaments.json`.
pub type FileFilamentRepository = JsonFileRepository<Filament>;

impl FilamentRepository for JsonFileRepository<Filament> {
    fn find_all(&self) -> Result<Vec<Filament>, RepositoryError> {
        Self::find_all(self)
    }

    fn find_by_id(&self, id: i64) -> Result<Filament, RepositoryError> {
        Self::find_by_id(self, id)
    }

    fn save(&self, filaments: &[Filament]) -> Result<(), RepositoryError> {
        Self::save(self, filaments)
    }

    fn add(&self, filament: Filament) -> Result<Filament, RepositoryError> {
        Self::add(self, filament)
    }

    fn update(&self, filament: Filament) -> Result<Filament, RepositoryError> {
        Self::update(self, filament)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        Self::delete_by_id(self, id)
    }
}
