//! Paths command handler.
//!
//! Displays the resolved data root and collection files for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Resolves paths the same way bootstrap does (flags, then environment,
/// then defaults) without creating anything, and prints them as
/// `key = value` lines.
pub fn execute(config: &CliConfig) -> Result<()> {
    super::emit(&render(config)?);
    Ok(())
}

/// Render the resolved paths.
pub fn render(config: &CliConfig) -> Result<String> {
    let paths = config.resolve_paths()?;
    Ok(paths.to_string())
}
