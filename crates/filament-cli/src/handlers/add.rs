//! Add command handler.
//!
//! Values not given as flags are asked for interactively.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use filament_core::Filament;

use crate::bootstrap::CliContext;
use crate::commands::FilamentArgs;
use crate::error::CliError;
use crate::presentation::{filament_fields, render_detail};
use crate::utils::input::{prompt_parsed_from, prompt_string_from};

/// Execute the add command, prompting on stdin for missing values.
pub fn execute(ctx: &CliContext, args: FilamentArgs) -> Result<()> {
    let output = run(ctx, args, &mut io::stdin().lock())?;
    super::emit(&output);
    Ok(())
}

/// Add a spool, reading missing values from `input`.
pub fn run(ctx: &CliContext, args: FilamentArgs, input: &mut impl BufRead) -> Result<String> {
    let filament = complete(args, input)?;

    // The store accepts dangling references; point it out but carry on.
    if let Err(e) = ctx
        .app()
        .filaments()
        .get_filament_type_by_id(filament.filament_type_id)
        && e.is_not_found()
    {
        eprintln!(
            "Warning: filament type {} does not exist; add it with 'filament type add'.",
            filament.filament_type_id
        );
    }

    let stored = ctx
        .app()
        .filaments()
        .add_filament(filament)
        .map_err(CliError::from)
        .context("Failed to add filament")?;
    let item = ctx
        .app()
        .filaments()
        .get_filament_with_type(stored.id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read back filament {}", stored.id))?;

    let details = render_detail(ctx.format, &item, &filament_fields(&item))?;
    Ok(super::with_status(
        ctx.format,
        &format!("Filament added with ID {}.", stored.id),
        details,
    ))
}

fn complete(args: FilamentArgs, input: &mut impl BufRead) -> Result<Filament> {
    let color = match args.color {
        Some(color) => color,
        None => prompt_string_from(input, "Color")?,
    };
    let filament_type_id = match args.type_id {
        Some(id) => id,
        None => prompt_parsed_from(input, "Filament type ID")?,
    };
    let price = match args.price {
        Some(price) => price,
        None => prompt_parsed_from(input, "Price")?,
    };
    let weight = match args.weight {
        Some(weight) => weight,
        None => prompt_parsed_from(input, "Weight (grams)")?,
    };

    Ok(Filament {
        id: 0,
        color,
        filament_type_id,
        price,
        weight,
    })
}
