//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: paths are resolved, storage directories prepared,
//! and the JSON file repositories handed to `AppCore`.
//!
//! Command handlers receive the fully-composed context and delegate work to
//! `AppCore`.

use anyhow::{Context, Result};

use filament_core::{AppCore, Repos, ResolvedPaths};
use filament_store::{StoreFactory, setup_storage};

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::OutputFormat;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Spool collection file override.
    pub filaments_file: Option<String>,
    /// Filament type collection file override.
    pub types_file: Option<String>,
    /// How results are rendered.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Take the global options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            filaments_file: cli.filaments_file.clone(),
            types_file: cli.types_file.clone(),
            format: cli.format,
        }
    }

    /// Resolve collection paths, applying the overrides.
    pub fn resolve_paths(&self) -> Result<ResolvedPaths, CliError> {
        ResolvedPaths::resolve_with_overrides(
            self.filaments_file.as_deref(),
            self.types_file.as_deref(),
        )
        .map_err(CliError::from)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Paths the repositories are bound to.
    pub paths: ResolvedPaths,
    /// Output format for this invocation.
    pub format: OutputFormat,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the resolved paths.
    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves the collection paths (flags, then environment, then defaults)
/// 2. Ensures the directories holding them exist
/// 3. Builds the JSON file repositories and the `AppCore` over them
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let paths = config.resolve_paths()?;
    setup_storage(&paths)
        .map_err(|e| CliError::Config(format!("{e:#}")))
        .context("Failed to prepare data directory")?;

    tracing::debug!(
        filaments = %paths.filaments_file.display(),
        filament_types = %paths.filament_types_file.display(),
        "bootstrapped JSON store"
    );

    let repos = StoreFactory::build_repos(&paths);
    Ok(bootstrap_with(repos, paths, config.format))
}

/// Compose a context from ready-made repositories.
///
/// Tests use this to run handlers against a scratch store.
pub fn bootstrap_with(repos: Repos, paths: ResolvedPaths, format: OutputFormat) -> CliContext {
    CliContext {
        app: AppCore::new(repos),
        paths,
        format,
    }
}
