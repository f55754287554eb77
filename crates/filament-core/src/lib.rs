//! Core domain types, repository ports and services for the filament inventory.
//!
//! This crate knows nothing about how collections are stored. Storage adapters
//! (see `filament-store`) implement the traits in [`ports`], and frontends
//! reach all functionality through [`services::AppCore`].
//!
//! # Layout
//!
//! - [`domain`] - spools, filament types and the cost calculation
//! - [`outcome`] - helpers for threading fallible steps as `Result` values
//! - [`ports`] - repository traits and the error types they share
//! - [`services`] - orchestration over the repositories
//! - [`paths`] - resolution of the data directory and collection files

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod outcome;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{CostCalculation, Filament, FilamentType, FilamentWithType, Record};
pub use outcome::{ResultExt, attempt};
pub use ports::{CoreError, FilamentRepository, FilamentTypeRepository, Repos, RepositoryError};
pub use services::{AppCore, FilamentService, FilamentTypeService};

// Re-export path utilities
pub use paths::{
    DEFAULT_FILAMENT_TYPES_FILE, DEFAULT_FILAMENTS_FILE, PathError, ResolvedPaths, data_root,
    env_file_path, filament_types_path, filaments_path,
};

// Used by the integration tests under tests/ only
#[cfg(test)]
use filament_store as _;
