//! Filament service - spool CRUD plus cost calculation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{CostCalculation, Filament, FilamentType, FilamentWithType};
use crate::ports::{CoreError, FilamentRepository, FilamentTypeRepository};

/// Service for spool operations.
///
/// CRUD calls are direct pass-throughs to the filament repository. The type
/// repository is only consulted to resolve a spool's type.
pub struct FilamentService {
    repo: Arc<dyn FilamentRepository>,
    types: Arc<dyn FilamentTypeRepository>,
}

impl FilamentService {
    /// Create a new filament service over both repositories.
    pub fn new(repo: Arc<dyn FilamentRepository>, types: Arc<dyn FilamentTypeRepository>) -> Self {
        Self { repo, types }
    }

    /// List all spools in stored order.
    pub fn get_all_filaments(&self) -> Result<Vec<Filament>, CoreError> {
        self.repo.find_all().map_err(CoreError::from)
    }

    /// List all spools, each joined with its type.
    ///
    /// Both collections are read once. A spool whose type id does not
    /// resolve is listed with no type rather than failing the listing.
    pub fn get_all_filaments_with_types(&self) -> Result<Vec<FilamentWithType>, CoreError> {
        let filaments = self.repo.find_all()?;
        let types: HashMap<i64, FilamentType> = self
            .types
            .find_all()?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        Ok(filaments
            .into_iter()
            .map(|filament| {
                let filament_type = types.get(&filament.filament_type_id).cloned();
                FilamentWithType {
                    filament,
                    filament_type,
                }
            })
            .collect())
    }

    /// Get a spool by id.
    pub fn get_filament_by_id(&self, id: i64) -> Result<Filament, CoreError> {
        self.repo.find_by_id(id).map_err(CoreError::from)
    }

    /// Get a spool joined with its type.
    ///
    /// A dangling type reference gives `filament_type: None`; any other
    /// failure reading the types is returned.
    pub fn get_filament_with_type(&self, id: i64) -> Result<FilamentWithType, CoreError> {
        let filament = self.get_filament_by_id(id)?;
        let filament_type = match self.types.find_by_id(filament.filament_type_id) {
            Ok(filament_type) => Some(filament_type),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };
        Ok(FilamentWithType {
            filament,
            filament_type,
        })
    }

    /// Add a spool; the stored copy carries the assigned id.
    pub fn add_filament(&self, filament: Filament) -> Result<Filament, CoreError> {
        self.repo.add(filament).map_err(CoreError::from)
    }

    /// Replace a spool by id.
    pub fn update_filament(&self, filament: Filament) -> Result<Filament, CoreError> {
        self.repo.update(filament).map_err(CoreError::from)
    }

    /// Delete a spool by id.
    pub fn delete_filament(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_by_id(id).map_err(CoreError::from)
    }

    /// Get a filament type by id.
    pub fn get_filament_type_by_id(&self, id: i64) -> Result<FilamentType, CoreError> {
        self.types.find_by_id(id).map_err(CoreError::from)
    }

    /// Cost and weight of `length_cm` centimeters taken from spool `filament_id`.
    ///
    /// Steps short-circuit on the first failure:
    /// 1. the spool must exist,
    /// 2. its weight must be positive (checked before the type is read),
    /// 3. its type must exist,
    /// 4. then [`CostCalculation::compute`] runs.
    pub fn calculate_cost(
        &self,
        filament_id: i64,
        length_cm: f64,
    ) -> Result<CostCalculation, CoreError> {
        self.get_filament_by_id(filament_id)
            .and_then(ensure_positive_weight)
            .and_then(|filament| {
                self.get_filament_type_by_id(filament.filament_type_id)
                    .and_then(|filament_type| {
                        CostCalculation::compute(&filament, &filament_type, length_cm)
                    })
            })
            .inspect(|calc| {
                tracing::debug!(
                    filament_id,
                    length_cm,
                    weight_grams = calc.weight_grams,
                    cost = calc.cost,
                    "calculated print cost"
                );
            })
    }
}

fn ensure_positive_weight(filament: Filament) -> Result<Filament, CoreError> {
    if filament.weight <= 0 {
        return Err(CoreError::Validation(
            "Cannot calculate cost: filament weight must be greater than 0".to_string(),
        ));
    }
    Ok(filament)
}
