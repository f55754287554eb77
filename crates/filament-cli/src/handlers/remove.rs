//! Delete command handler.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{filament_fields, render_key_values};
use crate::utils::input::prompt_confirmation_from;

/// Execute the delete command.
///
/// Shows the spool and asks for confirmation unless `force` is set.
pub fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    let output = run(ctx, id, force, &mut io::stdin().lock(), &mut io::stdout())?;
    super::emit(&output);
    Ok(())
}

/// Delete spool `id`, reading the confirmation from `input`.
///
/// Without `force` the spool is written to `preview` before asking.
pub fn run(
    ctx: &CliContext,
    id: i64,
    force: bool,
    input: &mut impl BufRead,
    preview: &mut impl Write,
) -> Result<String> {
    let filaments = ctx.app().filaments();
    let item = filaments
        .get_filament_with_type(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to delete filament {id}"))?;

    if !force {
        writeln!(preview, "{}\n", render_key_values(&filament_fields(&item)))
            .context("Failed to show filament")?;
        if !prompt_confirmation_from(input, "Delete this filament?")? {
            return Ok("Delete cancelled.".to_string());
        }
    }

    filaments
        .delete_filament(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to delete filament {id}"))?;
    Ok(format!("Filament {id} deleted."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, seed};
    use crate::presentation::OutputFormat;
    use filament_store::TestStore;
    use std::io::Cursor;

    #[test]
    fn force_deletes_without_prompt() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);
        let (_, spool_id) = seed(&ctx);

        let out = run(&ctx, spool_id, true, &mut Cursor::new(""), &mut io::sink()).unwrap();

        assert_eq!(out, format!("Filament {spool_id} deleted."));
        assert!(ctx.app().filaments().get_all_filaments().unwrap().is_empty());
    }

    #[test]
    fn declined_confirmation_keeps_spool() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);
        let (_, spool_id) = seed(&ctx);

        let mut shown: Vec<u8> = Vec::new();

        let out = run(&ctx, spool_id, false, &mut Cursor::new("n\n"), &mut shown).unwrap();

        assert_eq!(out, "Delete cancelled.");
        let shown = String::from_utf8(shown).unwrap();
        assert!(shown.contains("Jade White"), "{shown}");
        assert!(shown.ends_with("\n\n"));
        assert_eq!(ctx.app().filaments().get_all_filaments().unwrap().len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);

        let err = run(&ctx, 3, true, &mut Cursor::new(""), &mut io::sink()).unwrap_err();

        assert_eq!(format!("{err:#}"), "Failed to delete filament 3: Filament not found: 3");
    }
}
