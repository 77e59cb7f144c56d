//! Implementation of the `cfgkit log` command.

use anyhow::{Context, Result};

use crate::cli::types::LogArgs;
use crate::infrastructure::logging::{LogConfig, LogLevel, Logger};

impl LogArgs {
    /// Logger config for these arguments; unset options stay zero so the
    /// logger fills in its defaults.
    pub fn to_config(&self) -> LogConfig {
        LogConfig {
            file_name: self.file_name.clone().unwrap_or_default(),
            path: self.dir.clone().unwrap_or_default(),
            level: self.level.clone(),
            max_file_size_mb: self.max_size_mb.unwrap_or_default(),
            max_backups: self.max_backups.unwrap_or_default(),
            retention_days: self.retention_days.unwrap_or_default(),
            add_source: self.add_source,
        }
    }
}

/// Initialize the logger from `args` and emit the message at its level
pub fn execute(args: LogArgs) -> Result<()> {
    let logger = Logger::init(args.to_config()).context("Failed to initialize logger")?;

    match logger.level() {
        LogLevel::Debug => tracing::debug!(file = %logger.file_path().display(), "{}", args.message),
        LogLevel::Info => tracing::info!(file = %logger.file_path().display(), "{}", args.message),
        LogLevel::Warn => tracing::warn!(file = %logger.file_path().display(), "{}", args.message),
        LogLevel::Error => tracing::error!(file = %logger.file_path().display(), "{}", args.message),
    }

    // Dropping the handle flushes the file writer
    drop(logger);
    Ok(())
}
