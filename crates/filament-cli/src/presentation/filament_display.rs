//! Display rows and detail fields for spools, filament types and costs.

use filament_core::{CostCalculation, FilamentType, FilamentWithType};

const MISSING: &str = "--";

/// Column headers for spool listings.
pub const FILAMENT_HEADERS: &[&str] = &[
    "ID",
    "Color",
    "Manufacturer",
    "Name",
    "Type",
    "Price",
    "Weight",
];

/// Column headers for filament type listings.
pub const FILAMENT_TYPE_HEADERS: &[&str] = &[
    "ID",
    "Manufacturer",
    "Name",
    "Type",
    "Diameter",
    "Density",
    "Nozzle",
    "Bed",
];

/// One listing row for a spool. A dangling type shows as `--`.
pub fn filament_row(item: &FilamentWithType) -> Vec<String> {
    let filament_type = item.filament_type.as_ref();
    vec![
        item.filament.id.to_string(),
        item.filament.color.clone(),
        type_field(filament_type, |t| &t.manufacturer),
        type_field(filament_type, |t| &t.name),
        type_field(filament_type, |t| &t.material_type),
        format!("{:.2}", item.filament.price),
        format!("{} g", item.filament.weight),
    ]
}

/// Labelled fields for a single spool.
pub fn filament_fields(item: &FilamentWithType) -> Vec<(&'static str, String)> {
    let filament_type = item.filament_type.as_ref();
    let type_label = filament_type.map_or_else(
        || format!("{} (missing)", item.filament.filament_type_id),
        |t| format!("{} - {} {}", t.id, t.manufacturer, t.name),
    );
    vec![
        ("ID", item.filament.id.to_string()),
        ("Color", item.filament.color.clone()),
        ("Filament Type", type_label),
        ("Material", type_field(filament_type, |t| &t.material_type)),
        ("Price", format!("{:.2}", item.filament.price)),
        ("Weight", format!("{} g", item.filament.weight)),
    ]
}

/// One listing row for a filament type.
pub fn filament_type_row(filament_type: &FilamentType) -> Vec<String> {
    vec![
        filament_type.id.to_string(),
        filament_type.manufacturer.clone(),
        filament_type.name.clone(),
        filament_type.material_type.clone(),
        format!("{} mm", filament_type.diameter),
        format!("{} g/cm³", filament_type.density),
        or_missing(&filament_type.nozzle_temp),
        or_missing(&filament_type.bed_temp),
    ]
}

/// Labelled fields for a single filament type.
pub fn filament_type_fields(filament_type: &FilamentType) -> Vec<(&'static str, String)> {
    vec![
        ("ID", filament_type.id.to_string()),
        ("Name", filament_type.name.clone()),
        ("Manufacturer", filament_type.manufacturer.clone()),
        ("Description", or_missing(&filament_type.description)),
        ("Type", filament_type.material_type.clone()),
        ("Diameter", format!("{} mm", filament_type.diameter)),
        ("Nozzle Temp", or_missing(&filament_type.nozzle_temp)),
        ("Bed Temp", or_missing(&filament_type.bed_temp)),
        ("Density", format!("{} g/cm³", filament_type.density)),
    ]
}

/// Labelled fields for a cost calculation, rounded for display.
pub fn cost_fields(calc: &CostCalculation) -> Vec<(&'static str, String)> {
    vec![
        ("Filament ID", calc.filament_id.to_string()),
        ("Weight", format!("{:.2} g", calc.weight_grams)),
        ("Cost", format!("{:.2}", calc.cost)),
    ]
}

fn type_field(filament_type: Option<&FilamentType>, field: impl Fn(&FilamentType) -> &String) -> String {
    filament_type.map_or_else(|| MISSING.to_string(), |t| field(t).clone())
}

fn or_missing(value: &str) -> String {
    if value.is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filament_core::Filament;
    use rust_decimal::Decimal;

    fn joined(filament_type: Option<FilamentType>) -> FilamentWithType {
        FilamentWithType {
            filament: Filament {
                id: 3,
                color: "Jade White".to_string(),
                filament_type_id: 2,
                price: Decimal::new(25, 0),
                weight: 1000,
            },
            filament_type,
        }
    }

    fn polyterra() -> FilamentType {
        FilamentType {
            id: 2,
            name: "PolyTerra".to_string(),
            manufacturer: "Polymaker".to_string(),
            material_type: "PLA".to_string(),
            diameter: 1.75,
            density: 1.24,
            ..FilamentType::default()
        }
    }

    #[test]
    fn row_matches_headers() {
        let row = filament_row(&joined(Some(polyterra())));
        assert_eq!(row.len(), FILAMENT_HEADERS.len());
        assert_eq!(row[2], "Polymaker");
        assert_eq!(row[5], "25.00");
        assert_eq!(row[6], "1000 g");
    }

    #[test]
    fn dangling_type_shows_placeholders() {
        let row = filament_row(&joined(None));
        assert_eq!(&row[2..5], &["--", "--", "--"]);

        let fields = filament_fields(&joined(None));
        assert_eq!(fields[2], ("Filament Type", "2 (missing)".to_string()));
    }

    #[test]
    fn type_row_matches_headers_and_fills_blanks() {
        let row = filament_type_row(&polyterra());
        assert_eq!(row.len(), FILAMENT_TYPE_HEADERS.len());
        assert_eq!(row[4], "1.75 mm");
        assert_eq!(row[6], "--");
    }

    #[test]
    fn cost_is_rounded_to_two_places() {
        let fields = cost_fields(&CostCalculation {
            filament_id: 1,
            cost: 0.745_62,
            weight_grams: 29.824_8,
        });
        assert_eq!(fields[1].1, "29.82 g");
        assert_eq!(fields[2].1, "0.75");
    }
}
