//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of a command, renderable for people or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;
    /// JSON rendering for `--json`
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a JSON value for humans: strings unquoted, everything else as JSON.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Two-column `Path | Value` table of flattened configuration.
pub fn format_flat_table(entries: &BTreeMap<String, serde_json::Value>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    for (path, value) in entries {
        table.add_row(vec![Cell::new(path), Cell::new(display_value(value))]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("db")), "db");
        assert_eq!(display_value(&json!(5432)), "5432");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_format_flat_table_lists_every_path() {
        let mut entries = BTreeMap::new();
        entries.insert("database.host".to_string(), json!("db"));
        entries.insert("database.port".to_string(), json!(5432));

        let rendered = format_flat_table(&entries);
        assert!(rendered.contains("Path"));
        assert!(rendered.contains("database.host"));
        assert!(rendered.contains("db"));
        assert!(rendered.contains("5432"));
    }
}
