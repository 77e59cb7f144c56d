//! Implementation of the `cfgkit exists` command.

use anyhow::Result;
use serde::Serialize;

use super::merged_manager;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::{ExistsArgs, SourceArgs};

#[derive(Debug, Serialize)]
pub struct ExistsOutput {
    pub path: String,
    pub exists: bool,
}

impl CommandOutput for ExistsOutput {
    fn to_human(&self) -> String {
        self.exists.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Prints the answer and returns it so the caller can set the exit status.
pub fn execute(args: ExistsArgs, source: &SourceArgs, json_mode: bool) -> Result<bool> {
    let manager = merged_manager(source)?;
    let exists = manager.exists(&args.path);

    output(
        &ExistsOutput {
            path: args.path,
            exists,
        },
        json_mode,
    );
    Ok(exists)
}
