//! Main commands enum and spool subcommands.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use filament_core::Filament;

use crate::type_commands::TypeCommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all spools with their filament types
    List,

    /// Show one spool
    Get {
        /// Spool id
        id: i64,
    },

    /// Add a spool; missing values are prompted for
    Add(FilamentArgs),

    /// Change fields of an existing spool
    Update {
        /// Spool id
        id: i64,
        #[command(flatten)]
        fields: FilamentArgs,
    },

    /// Delete a spool
    Delete {
        /// Spool id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Cost and weight of a print taken from one spool
    Calculate {
        /// Spool id
        id: i64,
        /// Filament length in centimeters
        length_cm: f64,
    },

    /// Manage filament types
    Type {
        #[command(subcommand)]
        command: TypeCommand,
    },

    /// Show resolved data paths
    Paths,

    /// Show version information
    Version,
}

/// Spool fields accepted by `add` and `update`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilamentArgs {
    /// Color name
    #[arg(long)]
    pub color: Option<String>,

    /// Id of the spool's filament type
    #[arg(long = "type-id")]
    pub type_id: Option<i64>,

    /// Price paid for the spool
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Spool weight in grams
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<i32>,
}

impl FilamentArgs {
    /// True when no field was given.
    pub const fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.type_id.is_none()
            && self.price.is_none()
            && self.weight.is_none()
    }

    /// Overlay the given fields onto `filament`, keeping the rest.
    pub fn apply_to(self, filament: Filament) -> Filament {
        Filament {
            id: filament.id,
            color: self.color.unwrap_or(filament.color),
            filament_type_id: self.type_id.unwrap_or(filament.filament_type_id),
            price: self.price.unwrap_or(filament.price),
            weight: self.weight.unwrap_or(filament.weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Filament {
        Filament {
            id: 7,
            color: "Blue".to_string(),
            filament_type_id: 1,
            price: Decimal::new(2000, 2),
            weight: 1000,
        }
    }

    #[test]
    fn apply_overlays_only_given_fields() {
        let args = FilamentArgs {
            price: Some(Decimal::new(1850, 2)),
            ..FilamentArgs::default()
        };

        let updated = args.apply_to(stored());

        assert_eq!(updated.id, 7);
        assert_eq!(updated.color, "Blue");
        assert_eq!(updated.price, Decimal::new(1850, 2));
        assert_eq!(updated.weight, 1000);
    }

    #[test]
    fn empty_args_are_detected() {
        assert!(FilamentArgs::default().is_empty());
        assert!(
            !FilamentArgs {
                weight: Some(0),
                ..FilamentArgs::default()
            }
            .is_empty()
        );
    }
}
