//! Core domain types.
//!
//! These types represent the pure domain model, independent of how the
//! collections are stored.
//!
//! # Structure
//!
//! - `filament` - physical spools (`Filament`) and the joined listing view
//! - `filament_type` - material specifications (`FilamentType`)
//! - `cost` - the print cost calculation
//! - `record` - the `Record` trait shared by everything that gets persisted

mod cost;
mod filament;
mod filament_type;
mod record;

pub use cost::CostCalculation;
pub use filament::{Filament, FilamentWithType};
pub use filament_type::FilamentType;
pub use record::{Record, next_id};
