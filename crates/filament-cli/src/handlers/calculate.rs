//! Calculate command handler.

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{cost_fields, render_detail};

/// Execute the calculate command.
pub fn execute(ctx: &CliContext, id: i64, length_cm: f64) -> Result<()> {
    super::emit(&render(ctx, id, length_cm)?);
    Ok(())
}

/// Cost and weight of `length_cm` centimeters from spool `id`.
///
/// The core accepts any length; the CLI only lets positive, finite ones
/// through.
pub fn render(ctx: &CliContext, id: i64, length_cm: f64) -> Result<String> {
    if !(length_cm.is_finite() && length_cm > 0.0) {
        return Err(CliError::Arguments(format!(
            "length must be a positive number of centimeters, got {length_cm}"
        ))
        .into());
    }

    let calc = ctx
        .app()
        .filaments()
        .calculate_cost(id, length_cm)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to calculate cost for filament {id}"))?;

    render_detail(ctx.format, &calc, &cost_fields(&calc))
}
