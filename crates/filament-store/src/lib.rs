//! JSON file repository implementations for the filament inventory.
//!
//! Each collection lives in one pretty-printed JSON array. Every operation
//! reads the whole file and every mutation rewrites it in full; there is no
//! cache and no locking, so the last writer wins.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export TestStore for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestStore;

// Re-export repository implementations
pub use repositories::{FileFilamentRepository, FileFilamentTypeRepository, JsonFileRepository};

// Re-export setup functions for convenient access
pub use setup::setup_storage;
