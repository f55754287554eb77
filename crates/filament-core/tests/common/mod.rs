//! Shared fixtures for store integration tests.

#![allow(dead_code)]

use filament_core::{Filament, FilamentType};
use rust_decimal::Decimal;

pub fn spool(color: &str, filament_type_id: i64, price: Decimal, weight: i32) -> Filament {
    Filament {
        id: 0,
        color: color.to_string(),
        filament_type_id,
        price,
        weight,
    }
}

pub fn filament_type(manufacturer: &str, name: &str, diameter: f64, density: f64) -> FilamentType {
    FilamentType {
        id: 0,
        name: name.to_string(),
        manufacturer: manufacturer.to_string(),
        description: String::new(),
        material_type: "PLA".to_string(),
        diameter,
        nozzle_temp: "190-220".to_string(),
        bed_temp: "50-60".to_string(),
        density,
    }
}
