//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern:
//! - `execute(ctx, ...) -> Result<()>` prints the outcome
//! - `run`/`render` builds the output as a `String` and is what tests call
//!
//! Each handler calls service methods, attaches command context to
//! failures and renders the result in the requested format. Handlers never
//! access repositories or files directly.

pub mod add;
pub mod calculate;
pub mod get;
pub mod list;
pub mod paths;
pub mod remove;
pub mod types;
pub mod update;
pub mod version;

use crate::presentation::OutputFormat;

/// Print handler output, adding a final newline only when missing.
pub(crate) fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

/// Prefix rendered details with a status line in table mode.
///
/// JSON and CSV output stay machine-readable, so they get the details only.
pub(crate) fn with_status(format: OutputFormat, status: &str, details: String) -> String {
    match format {
        OutputFormat::Table => format!("{status}\n\n{details}"),
        OutputFormat::Json | OutputFormat::Csv => details,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use filament_core::{Filament, FilamentType};
    use filament_store::TestStore;
    use rust_decimal::Decimal;

    use crate::bootstrap::{CliContext, bootstrap_with};
    use crate::presentation::OutputFormat;

    /// A context over a fresh scratch store.
    pub fn context(store: &TestStore, format: OutputFormat) -> CliContext {
        bootstrap_with(store.repos(), store.paths().clone(), format)
    }

    /// Seed one PLA type and one 1 kg spool of it; returns their ids.
    pub fn seed(ctx: &CliContext) -> (i64, i64) {
        let pla = ctx
            .app()
            .filament_types()
            .add_filament_type(FilamentType {
                name: "PLA Basic".to_string(),
                manufacturer: "Bambu".to_string(),
                material_type: "PLA".to_string(),
                diameter: 1.75,
                density: 1.24,
                ..FilamentType::default()
            })
            .unwrap();
        let spool = ctx
            .app()
            .filaments()
            .add_filament(Filament {
                id: 0,
                color: "Jade White".to_string(),
                filament_type_id: pla.id,
                price: Decimal::new(2500, 2),
                weight: 1000,
            })
            .unwrap();
        (pla.id, spool.id)
    }
}
