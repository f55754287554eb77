//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to
//! `AppCore`.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use filament_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn main() -> ExitCode {
    load_env_files();

    // Parse after .env is loaded so clap's env fallbacks can see it
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Load `.env` from the current directory, then from the data root.
///
/// Variables already set in the environment are never overridden.
fn load_env_files() {
    dotenvy::dotenv().ok();
    if let Ok(path) = filament_core::env_file_path() {
        dotenvy::from_path(path).ok();
    }
}

/// Log to stderr so stdout stays clean for table/JSON/CSV output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Paths and version never touch the store, so they skip bootstrap
    match command {
        Commands::Paths => handlers::paths::execute(&config),
        Commands::Version => {
            handlers::version::execute();
            Ok(())
        }
        Commands::List => handlers::list::execute(&bootstrap(config)?),
        Commands::Get { id } => handlers::get::execute(&bootstrap(config)?, id),
        Commands::Add(fields) => handlers::add::execute(&bootstrap(config)?, fields),
        Commands::Update { id, fields } => {
            handlers::update::execute(&bootstrap(config)?, id, fields)
        }
        Commands::Delete { id, force } => {
            handlers::remove::execute(&bootstrap(config)?, id, force)
        }
        Commands::Calculate { id, length_cm } => {
            handlers::calculate::execute(&bootstrap(config)?, id, length_cm)
        }
        Commands::Type { command } => handlers::types::execute(&bootstrap(config)?, command),
    }
}
