//! Shared CLI presentation utilities.
//!
//! Handlers hand over typed values plus display rows; this module turns
//! them into table, JSON or CSV text.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Everything returns a `String`; printing is the handler's job

pub mod filament_display;
pub mod format;
pub mod tables;

// Re-export commonly used items
pub use filament_display::{
    FILAMENT_HEADERS, FILAMENT_TYPE_HEADERS, cost_fields, filament_fields, filament_row,
    filament_type_fields, filament_type_row,
};
pub use format::{OutputFormat, render_detail, render_list, to_csv, to_json};
pub use tables::{render_key_values, render_table, separator, truncate_string};
