//! Filament (spool) domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filament_type::FilamentType;
use super::record::Record;

/// One physical spool in the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filament {
    /// Id assigned by the filament repository.
    pub id: i64,
    pub color: String,
    /// Soft reference to a [`FilamentType`] id. Not checked on write.
    pub filament_type_id: i64,
    /// Price paid for the whole spool.
    ///
    /// Stored as a JSON number carrying the exact decimal digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Filled weight of the spool as sold, in grams.
    ///
    /// Zero or negative values can be stored; cost calculation rejects them.
    pub weight: i32,
}

impl Record for Filament {
    const ENTITY: &'static str = "Filament";

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

/// A spool joined with its filament type, for listings.
///
/// `filament_type` is `None` when the spool's type id does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilamentWithType {
    #[serde(flatten)]
    pub filament: Filament,
    pub filament_type: Option<FilamentType>,
}
