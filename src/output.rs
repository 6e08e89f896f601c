//! Table and JSON output formatting for CLI commands.

use serde_json::Value;
use tabled::builder::Builder;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print resource records in the selected format
pub fn print_records(records: &[Value], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", records_table(records));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single value in the selected format
pub fn print_value(value: &Value, format: OutputFormat) {
    match (format, value) {
        (OutputFormat::Table, Value::Object(fields)) => {
            for (key, field) in fields {
                print_kv(key, &cell(field));
            }
        }
        _ => {
            let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Render records as a table.
///
/// Columns are the union of the records' top-level keys in order of first
/// appearance. Nested values are shown as compact JSON.
pub fn records_table(records: &[Value]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        if let Value::Object(fields) = record {
            for key in fields.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
    }

    let mut builder = Builder::default();
    if columns.is_empty() {
        builder.push_record(["value"]);
        for record in records {
            builder.push_record([cell(record)]);
        }
    } else {
        builder.push_record(columns.iter().copied());
        for record in records {
            builder.push_record(
                columns
                    .iter()
                    .map(|column| record.get(*column).map(cell).unwrap_or_default()),
            );
        }
    }
    builder.build().to_string()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
