//! Repository implementations backed by JSON files.
//!
//! One generic [`JsonFileRepository`] implements the whole-collection
//! read-modify-write cycle; the port traits are implemented for its
//! spool and filament type instantiations.

mod filament_repository;
mod filament_type_repository;
mod json_file_repository;

pub use filament_repository::FileFilamentRepository;
pub use filament_type_repository::FileFilamentTypeRepository;
pub use json_file_repository::JsonFileRepository;
