//! Filament type domain types.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// A material specification shared by zero or more spools.
///
/// Spools point at a type through [`Filament::filament_type_id`]; nothing
/// stops a type from being deleted while spools still reference it.
///
/// [`Filament::filament_type_id`]: super::Filament::filament_type_id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentType {
    /// Id assigned by the type repository.
    pub id: i64,
    /// Product name (e.g. "PolyTerra").
    pub name: String,
    pub manufacturer: String,
    pub description: String,
    /// Material family (e.g. "PLA", "PETG").
    #[serde(rename = "type")]
    pub material_type: String,
    /// Filament diameter in millimeters.
    pub diameter: f64,
    /// Free-form nozzle temperature range (e.g. "190-220").
    pub nozzle_temp: String,
    /// Free-form bed temperature range (e.g. "50-60").
    pub bed_temp: String,
    /// Density in g/cm³.
    pub density: f64,
}

impl Record for FilamentType {
    const ENTITY: &'static str = "Filament type";

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}
