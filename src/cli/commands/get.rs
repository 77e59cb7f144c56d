//! Implementation of the `cfgkit get` command.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use super::merged_manager;
use crate::cli::output::{display_value, output, CommandOutput};
use crate::cli::types::{GetArgs, SourceArgs, ValueKind};
use crate::infrastructure::config::ConfigManager;

#[derive(Debug, Serialize)]
pub struct GetOutput {
    pub path: String,
    pub value: serde_json::Value,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        match &self.value {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(key, value)| format!("{key}: {}", display_value(value)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => display_value(other),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Read `path` as `kind`.
pub fn lookup(manager: &ConfigManager, path: &str, kind: ValueKind) -> Result<serde_json::Value> {
    let value = match kind {
        ValueKind::String => json!(manager.get_string(path)?),
        ValueKind::Bool => json!(manager.get_bool(path)?),
        ValueKind::Int => json!(manager.get_int(path)?),
        ValueKind::Float => json!(manager.get_float64(path)?),
        ValueKind::Map => json!(manager.get_map_string(path)?),
    };
    Ok(value)
}

/// Print the value at `args.path`
pub fn execute(args: GetArgs, source: &SourceArgs, json_mode: bool) -> Result<()> {
    let manager = merged_manager(source)?;
    let value = lookup(&manager, &args.path, args.kind)?;

    output(
        &GetOutput {
            path: args.path,
            value,
        },
        json_mode,
    );
    Ok(())
}
