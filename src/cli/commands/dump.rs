//! Implementation of the `cfgkit dump` command.

use anyhow::{Context, Result};

use super::merged_manager;
use crate::cli::output::format_flat_table;
use crate::cli::types::{DumpArgs, DumpFormat, SourceArgs};
use crate::infrastructure::config::flatten_json;

/// Print the merged configuration
pub fn execute(args: DumpArgs, source: &SourceArgs) -> Result<()> {
    let manager = merged_manager(source)?;
    let all = manager.get_all();
    let delimiter = &manager.options().delimiter;

    let rendered = match (args.format, args.flat) {
        (DumpFormat::Table, _) => format_flat_table(&flatten_json(&all, delimiter)),
        (DumpFormat::Json, false) => {
            serde_json::to_string_pretty(&all).context("Failed to render configuration as JSON")?
        }
        (DumpFormat::Json, true) => serde_json::to_string_pretty(&flatten_json(&all, delimiter))
            .context("Failed to render configuration as JSON")?,
        (DumpFormat::Yaml, false) => {
            serde_yaml::to_string(&all).context("Failed to render configuration as YAML")?
        }
        (DumpFormat::Yaml, true) => serde_yaml::to_string(&flatten_json(&all, delimiter))
            .context("Failed to render configuration as YAML")?,
    };

    println!("{}", rendered.trim_end());
    Ok(())
}
