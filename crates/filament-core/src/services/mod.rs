//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They hold no state of their own and don't know about concrete
//! repository implementations.

mod app_core;
mod filament_service;
mod filament_type_service;

pub use app_core::AppCore;
pub use filament_service::FilamentService;
pub use filament_type_service::FilamentTypeService;
