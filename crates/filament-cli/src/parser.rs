//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;
use crate::presentation::OutputFormat;

/// Command-line interface for the filament spool inventory.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser, Debug)]
#[command(name = "filament")]
#[command(about = "Track 3D-printing filament spools and what prints cost")]
#[command(version = filament_build_info::LONG_VERSION)]
pub struct Cli {
    /// Spool collection file for this invocation
    #[arg(long = "filaments-file", global = true, env = "FILAMENT_CONFIG_PATH")]
    pub filaments_file: Option<String>,

    /// Filament type collection file for this invocation
    #[arg(long = "types-file", global = true, env = "FILAMENT_TYPES_PATH")]
    pub types_file: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
