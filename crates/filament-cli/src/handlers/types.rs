//! Filament type command handlers.
//!
//! Same shape as the spool handlers: list, get, add with prompts for the
//! required fields, overlay-then-replace update, confirmed delete.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use filament_core::FilamentType;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{
    FILAMENT_TYPE_HEADERS, filament_type_fields, filament_type_row, render_detail,
    render_key_values, render_list,
};
use crate::type_commands::{FilamentTypeArgs, TypeCommand};
use crate::utils::input::{prompt_confirmation_from, prompt_parsed_from, prompt_string_from};

/// Execute a `type` subcommand, prompting on stdin where needed.
pub fn execute(ctx: &CliContext, command: TypeCommand) -> Result<()> {
    let output = run(ctx, command, &mut io::stdin().lock(), &mut io::stdout())?;
    super::emit(&output);
    Ok(())
}

/// Run a `type` subcommand, reading any answers from `input`.
///
/// The record shown before a delete confirmation goes to `preview`.
pub fn run(
    ctx: &CliContext,
    command: TypeCommand,
    input: &mut impl BufRead,
    preview: &mut impl Write,
) -> Result<String> {
    match command {
        TypeCommand::List => list(ctx),
        TypeCommand::Get { id } => get(ctx, id),
        TypeCommand::Add(fields) => add(ctx, fields, input),
        TypeCommand::Update { id, fields } => update(ctx, id, fields),
        TypeCommand::Delete { id, force } => delete(ctx, id, force, input, preview),
    }
}

fn list(ctx: &CliContext) -> Result<String> {
    let filament_types = ctx
        .app()
        .filament_types()
        .get_all_filament_types()
        .map_err(CliError::from)
        .context("Failed to retrieve filament types")?;

    render_list(
        ctx.format,
        &filament_types,
        FILAMENT_TYPE_HEADERS,
        filament_type_row,
        "No filament types found.",
    )
}

fn get(ctx: &CliContext, id: i64) -> Result<String> {
    let filament_type = fetch(ctx, id, "get")?;
    render_detail(ctx.format, &filament_type, &filament_type_fields(&filament_type))
}

fn add(ctx: &CliContext, fields: FilamentTypeArgs, input: &mut impl BufRead) -> Result<String> {
    let filament_type = complete(fields, input)?;
    let stored = ctx
        .app()
        .filament_types()
        .add_filament_type(filament_type)
        .map_err(CliError::from)
        .context("Failed to add filament type")?;

    let details = render_detail(ctx.format, &stored, &filament_type_fields(&stored))?;
    Ok(super::with_status(
        ctx.format,
        &format!("Filament type added with ID {}.", stored.id),
        details,
    ))
}

fn update(ctx: &CliContext, id: i64, fields: FilamentTypeArgs) -> Result<String> {
    if fields.is_empty() {
        return Err(CliError::Arguments(
            "nothing to update; pass at least one filament type field".to_string(),
        )
        .into());
    }

    let existing = fetch(ctx, id, "update")?;
    let updated = ctx
        .app()
        .filament_types()
        .update_filament_type(fields.apply_to(existing))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to update filament type {id}"))?;

    let details = render_detail(ctx.format, &updated, &filament_type_fields(&updated))?;
    Ok(super::with_status(
        ctx.format,
        &format!("Filament type {id} updated."),
        details,
    ))
}

fn delete(
    ctx: &CliContext,
    id: i64,
    force: bool,
    input: &mut impl BufRead,
    preview: &mut impl Write,
) -> Result<String> {
    let existing = fetch(ctx, id, "delete")?;

    if !force {
        writeln!(preview, "{}\n", render_key_values(&filament_type_fields(&existing)))
            .context("Failed to show filament type")?;
        if !prompt_confirmation_from(
            input,
            "Delete this filament type? Spools using it will keep a dangling reference",
        )? {
            return Ok("Delete cancelled.".to_string());
        }
    }

    ctx.app()
        .filament_types()
        .delete_filament_type(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to delete filament type {id}"))?;
    Ok(format!("Filament type {id} deleted."))
}

fn fetch(ctx: &CliContext, id: i64, action: &str) -> Result<FilamentType> {
    ctx.app()
        .filament_types()
        .get_filament_type_by_id(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to {action} filament type {id}"))
}

fn complete(fields: FilamentTypeArgs, input: &mut impl BufRead) -> Result<FilamentType> {
    let name = match fields.name {
        Some(name) => name,
        None => prompt_string_from(input, "Name")?,
    };
    let manufacturer = match fields.manufacturer {
        Some(manufacturer) => manufacturer,
        None => prompt_string_from(input, "Manufacturer")?,
    };
    let material_type = match fields.material_type {
        Some(material_type) => material_type,
        None => prompt_string_from(input, "Material (e.g. PLA, PETG)")?,
    };
    let diameter = match fields.diameter {
        Some(diameter) => diameter,
        None => prompt_parsed_from(input, "Diameter (mm)")?,
    };
    let density = match fields.density {
        Some(density) => density,
        None => prompt_parsed_from(input, "Density (g/cm³)")?,
    };

    Ok(FilamentType {
        id: 0,
        name,
        manufacturer,
        description: fields.description.unwrap_or_default(),
        material_type,
        diameter,
        nozzle_temp: fields.nozzle_temp.unwrap_or_default(),
        bed_temp: fields.bed_temp.unwrap_or_default(),
        density,
    })
}
