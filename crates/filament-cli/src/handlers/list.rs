//! List command handler.

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{FILAMENT_HEADERS, filament_row, render_list};

/// Execute the list command.
///
/// Shows every spool in stored order, each joined with its filament type.
pub fn execute(ctx: &CliContext) -> Result<()> {
    super::emit(&render(ctx)?);
    Ok(())
}

/// Render the spool listing in the context's output format.
pub fn render(ctx: &CliContext) -> Result<String> {
    let filaments = ctx
        .app()
        .filaments()
        .get_all_filaments_with_types()
        .map_err(CliError::from)
        .context("Failed to retrieve filaments")?;

    render_list(
        ctx.format,
        &filaments,
        FILAMENT_HEADERS,
        filament_row,
        "No filaments found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, seed};
    use crate::presentation::OutputFormat;
    use filament_store::TestStore;

    #[test]
    fn empty_inventory_message() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);

        assert_eq!(render(&ctx).unwrap(), "No filaments found.");
    }

    #[test]
    fn empty_inventory_as_json_is_empty_array() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Json);

        assert_eq!(render(&ctx).unwrap(), "[]");
    }

    #[test]
    fn table_lists_spool_with_type() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);
        seed(&ctx);

        let out = render(&ctx).unwrap();
        let row = out.lines().nth(2).unwrap();

        assert!(out.starts_with("ID"));
        assert!(row.contains("Jade White"));
        assert!(row.contains("Bambu"));
        assert!(row.contains("25.00"));
    }

    #[test]
    fn json_embeds_filament_type() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Json);
        seed(&ctx);

        let parsed: serde_json::Value = serde_json::from_str(&render(&ctx).unwrap()).unwrap();

        assert_eq!(parsed[0]["color"], "Jade White");
        assert_eq!(parsed[0]["filamentType"]["manufacturer"], "Bambu");
    }

    #[test]
    fn malformed_store_is_reported_with_context() {
        let store = TestStore::new().unwrap();
        store.write_filaments_raw("{ nope").unwrap();
        let ctx = context(&store, OutputFormat::Table);

        let err = render(&ctx).unwrap_err();

        assert!(format!("{err:#}").starts_with("Failed to retrieve filaments: Failed to parse"));
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 65);
    }
}
