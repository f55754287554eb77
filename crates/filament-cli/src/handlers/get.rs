//! Get command handler.

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{filament_fields, render_detail};

/// Execute the get command.
pub fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    super::emit(&render(ctx, id)?);
    Ok(())
}

/// Render one spool with its filament type.
pub fn render(ctx: &CliContext, id: i64) -> Result<String> {
    let item = ctx
        .app()
        .filaments()
        .get_filament_with_type(id)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to get filament {id}"))?;

    render_detail(ctx.format, &item, &filament_fields(&item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, seed};
    use crate::presentation::OutputFormat;
    use filament_store::TestStore;

    #[test]
    fn shows_spool_fields() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);
        let (_, spool_id) = seed(&ctx);

        let out = render(&ctx, spool_id).unwrap();

        assert!(out.contains("Color          Jade White"));
        assert!(out.contains("Filament Type  1 - Bambu PLA Basic"));
        assert!(out.contains("Weight         1000 g"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = TestStore::new().unwrap();
        let ctx = context(&store, OutputFormat::Table);

        let err = render(&ctx, 7).unwrap_err();

        assert_eq!(format!("{err:#}"), "Failed to get filament 7: Filament not found: 7");
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 1);
    }
}
