//! Update command handler.
//!
//! Loads the stored spool, overlays the given fields and submits the whole
//! record back.

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::commands::FilamentArgs;
use crate::error::CliError;
use crate::presentation::{filament_fields, render_detail};

/// Execute the update command.
pub fn execute(ctx: &CliContext, id: i64, fields: FilamentArgs) -> Result<()> {
    super::emit(&run(ctx, id, fields)?);
    Ok(())
}

/// Apply `fields` to spool `id` and render the result.
pub fn run(ctx: &CliContext, id: i64, fields: FilamentArgs) -> Result<String> {
    if fields.is_empty() {
        return Err(CliError::Arguments(
            "nothing to update; pass at least one of --color, --type-id, --price, --weight"
                .to_string(),
        )
        .into());
    }

    let filaments = ctx.app().filaments();
    let existing = filaments
        .get_filament_by_id(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to update filament {id}"))?;
    filaments
        .update_filament(fields.apply_to(existing))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to update filament {id}"))?;

    let item = filaments
        .get_filament_with_type(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read back filament {id}"))?;
    let details = render_detail(ctx.format, &item, &filament_fields(&item))?;
    Ok(super::with_status(
        ctx.format,
        &format!("Filament {id} updated."),
        details,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, seed};
    use crate::presentation::OutputFormat;
    use filament_store::TestStore;

    #[test]
    fn overlays_given_fields_only() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);
        let (_, spool_id) = seed(&ctx);

        run(
            &ctx,
            spool_id,
            FilamentArgs {
                weight: Some(250),
                ..FilamentArgs::default()
            },
        )
        .unwrap();

        let stored = ctx.app().filaments().get_filament_by_id(spool_id).unwrap();
        assert_eq!(stored.weight, 250);
        assert_eq!(stored.color, "Jade White");
    }

    #[test]
    fn no_fields_is_a_usage_error() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);

        let err = run(&ctx, 1, FilamentArgs::default()).unwrap_err();

        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
    }

    #[test]
    fn unknown_id_is_reported() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);

        let err = run(
            &ctx,
            9,
            FilamentArgs {
                color: Some("Red".to_string()),
                ..FilamentArgs::default()
            },
        )
        .unwrap_err();

        assert_eq!(format!("{err:#}"), "Failed to update filament 9: Filament not found: 9");
    }
}
