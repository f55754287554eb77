//! Filament type subcommands.

use clap::{Args, Subcommand};

use filament_core::FilamentType;

/// Filament type management commands.
#[derive(Subcommand, Debug)]
pub enum TypeCommand {
    /// List filament types sorted by manufacturer and name
    List,

    /// Show one filament type
    Get {
        /// Filament type id
        id: i64,
    },

    /// Add a filament type; missing required values are prompted for
    Add(FilamentTypeArgs),

    /// Change fields of an existing filament type
    Update {
        /// Filament type id
        id: i64,
        #[command(flatten)]
        fields: FilamentTypeArgs,
    },

    /// Delete a filament type (spools referencing it are left as they are)
    Delete {
        /// Filament type id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Filament type fields accepted by `type add` and `type update`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilamentTypeArgs {
    /// Product name (e.g. "PolyTerra")
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub manufacturer: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Material family (e.g. PLA, PETG)
    #[arg(long = "material")]
    pub material_type: Option<String>,

    /// Diameter in millimeters
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Nozzle temperature range (e.g. 190-220)
    #[arg(long = "nozzle-temp")]
    pub nozzle_temp: Option<String>,

    /// Bed temperature range (e.g. 50-60)
    #[arg(long = "bed-temp")]
    pub bed_temp: Option<String>,

    /// Density in g/cm³
    #[arg(long)]
    pub density: Option<f64>,
}

impl FilamentTypeArgs {
    /// True when no field was given.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.manufacturer.is_none()
            && self.description.is_none()
            && self.material_type.is_none()
            && self.diameter.is_none()
            && self.nozzle_temp.is_none()
            && self.bed_temp.is_none()
            && self.density.is_none()
    }

    /// Overlay the given fields onto `filament_type`, keeping the rest.
    pub fn apply_to(self, filament_type: FilamentType) -> FilamentType {
        FilamentType {
            id: filament_type.id,
            name: self.name.unwrap_or(filament_type.name),
            manufacturer: self.manufacturer.unwrap_or(filament_type.manufacturer),
            description: self.description.unwrap_or(filament_type.description),
            material_type: self.material_type.unwrap_or(filament_type.material_type),
            diameter: self.diameter.unwrap_or(filament_type.diameter),
            nozzle_temp: self.nozzle_temp.unwrap_or(filament_type.nozzle_temp),
            bed_temp: self.bed_temp.unwrap_or(filament_type.bed_temp),
            density: self.density.unwrap_or(filament_type.density),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_unspecified_fields() {
        let stored = FilamentType {
            id: 2,
            name: "PolyTerra".to_string(),
            manufacturer: "Polymaker".to_string(),
            material_type: "PLA".to_string(),
            diameter: 1.75,
            density: 1.24,
            nozzle_temp: "190-220".to_string(),
            ..FilamentType::default()
        };
        let args = FilamentTypeArgs {
            density: Some(1.31),
            bed_temp: Some("55".to_string()),
            ..FilamentTypeArgs::default()
        };

        let updated = args.apply_to(stored);

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "PolyTerra");
        assert_eq!(updated.nozzle_temp, "190-220");
        assert_eq!(updated.bed_temp, "55");
        assert!((updated.density - 1.31).abs() < f64::EPSILON);
    }
}
