//! Print cost calculation.

use std::f64::consts::PI;

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use super::filament::Filament;
use super::filament_type::FilamentType;
use crate::ports::CoreError;

/// Cost and weight of a length of filament taken from one spool.
///
/// Computed fresh on every request and never stored. Values are unrounded;
/// rounding is left to whoever displays them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCalculation {
    pub filament_id: i64,
    /// Share of the spool price consumed by the print.
    pub cost: f64,
    /// Weight of the requested length in grams.
    pub weight_grams: f64,
}

impl CostCalculation {
    /// Compute cost and weight for `length_cm` centimeters of `filament`.
    ///
    /// The filament is modelled as a cylinder of the type's diameter; its
    /// weight follows from the type's density, and the cost is the consumed
    /// fraction of the spool weight times the spool price.
    ///
    /// Callers must have rejected spools with a non-positive weight already.
    pub fn compute(
        filament: &Filament,
        filament_type: &FilamentType,
        length_cm: f64,
    ) -> Result<Self, CoreError> {
        let price = filament.price.to_f64().ok_or_else(|| {
            CoreError::Validation(format!(
                "Cannot calculate cost: price {} is not representable",
                filament.price
            ))
        })?;

        // diameter is in mm: halve for the radius, divide by 10 for cm
        let radius_cm = (filament_type.diameter / 2.0) / 10.0;
        let volume_cm3 = PI * radius_cm.powi(2) * length_cm;
        let weight_grams = volume_cm3 * filament_type.density;
        let cost = (weight_grams / f64::from(filament.weight)) * price;

        Ok(Self {
            filament_id: filament.id,
            cost,
            weight_grams,
        })
    }
}
