//! Path utilities for the filament data directory and collection files.
//!
//! This module provides the canonical path resolution for every frontend:
//! - Data root (`~/.filament` unless overridden)
//! - Spool collection file
//! - Filament type collection file
//! - The optional `.env` file holding persisted overrides
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - Resolution never creates the collection files themselves

mod ensure;
mod error;
mod platform;
mod resolver;
mod storage;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Roots and user input
pub use platform::{data_root, normalize_user_path};

// Collection files
pub use storage::{
    DEFAULT_FILAMENT_TYPES_FILE, DEFAULT_FILAMENTS_FILE, env_file_path, filament_types_path,
    filaments_path,
};

// Directory operations
pub use ensure::ensure_parent_dir;

// Pure resolver for bootstrap and the `paths` command
pub use resolver::ResolvedPaths;
