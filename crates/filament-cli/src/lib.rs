//! Command-line adapter for the filament inventory.
//!
//! The binary in `main.rs` parses arguments with [`Cli`], builds a
//! [`CliContext`] through [`bootstrap`] and hands it to a handler. Handlers
//! call one `AppCore` service method each and render the outcome; none of
//! them touch repositories or files directly.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod type_commands;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, FilamentArgs};
pub use error::CliError;
pub use parser::Cli;
pub use presentation::OutputFormat;
pub use type_commands::{FilamentTypeArgs, TypeCommand};
