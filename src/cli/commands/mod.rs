//! CLI command implementations.

pub mod dump;
pub mod exists;
pub mod get;
pub mod log;

use anyhow::{Context, Result};

use crate::cli::types::SourceArgs;
use crate::infrastructure::config::ConfigManager;

/// Build a loader for `source` and merge its file and environment layers.
pub(crate) fn merged_manager(source: &SourceArgs) -> Result<ConfigManager> {
    let mut manager = ConfigManager::new(source.options());
    manager.merge_sources().with_context(|| match &source.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration from the environment".to_string(),
    })?;
    Ok(manager)
}
