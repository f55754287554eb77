//! Output format selection and rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use super::tables::{render_key_values, render_table};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// Pretty-print a value as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to format JSON output")
}

/// Write a header row and data rows as CSV, quoting where needed.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Render a collection.
///
/// Table mode prints `empty_message` instead of a header-only table. JSON
/// serializes `items` as-is; table and CSV use the display rows.
pub fn render_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    headers: &[&str],
    row: impl Fn(&T) -> Vec<String>,
    empty_message: &str,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(items),
        OutputFormat::Csv => {
            let rows: Vec<Vec<String>> = items.iter().map(row).collect();
            to_csv(headers, &rows)
        }
        OutputFormat::Table if items.is_empty() => Ok(empty_message.to_string()),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = items.iter().map(row).collect();
            Ok(render_table(headers, &rows))
        }
    }
}

/// Render a single value.
///
/// Table mode prints the labelled fields, CSV writes them as `Field,Value`
/// rows and JSON serializes `item`.
pub fn render_detail<T: Serialize>(
    format: OutputFormat,
    item: &T,
    fields: &[(&str, String)],
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(item),
        OutputFormat::Csv => {
            let rows: Vec<Vec<String>> = fields
                .iter()
                .map(|(label, value)| vec![(*label).to_string(), value.clone()])
                .collect();
            to_csv(&["Field", "Value"], &rows)
        }
        OutputFormat::Table => Ok(render_key_values(fields)),
    }
}
