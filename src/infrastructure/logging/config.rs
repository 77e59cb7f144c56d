//! Logger options and their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default log file stem (`app.log`)
pub const DEFAULT_FILE_NAME: &str = "app";
/// Default minimum level
pub const DEFAULT_LEVEL: &str = "info";
/// Default size threshold in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 500;
/// Default number of rotated files to keep
pub const DEFAULT_MAX_BACKUPS: usize = 7;
/// Default retention in days
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Logging configuration
///
/// Zero or empty fields fall back to their defaults when the logger is
/// built, so a partially filled config (or `LogConfig::default()` with a
/// single field set) is always usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file stem; the file is `<path>/<file_name>.log`
    pub file_name: String,

    /// Directory for log files; empty means `<temp-dir>/logs`
    pub path: PathBuf,

    /// Minimum level (debug, info, warn, error), case-insensitive
    pub level: String,

    /// Rotate once the active file would exceed this many megabytes
    pub max_file_size_mb: u64,

    /// Rotated files to keep
    pub max_backups: usize,

    /// Rotated files older than this many days are removed
    pub retention_days: u32,

    /// Record the call-site file and line on every event
    pub add_source: bool,
}

impl LogConfig {
    /// Replace every zero or empty field with its default
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.file_name.is_empty() {
            self.file_name = DEFAULT_FILE_NAME.to_string();
        }
        if self.path.as_os_str().is_empty() {
            self.path = default_log_dir();
        }
        if self.level.is_empty() {
            self.level = DEFAULT_LEVEL.to_string();
        }
        if self.max_file_size_mb == 0 {
            self.max_file_size_mb = DEFAULT_MAX_FILE_SIZE_MB;
        }
        if self.max_backups == 0 {
            self.max_backups = DEFAULT_MAX_BACKUPS;
        }
        if self.retention_days == 0 {
            self.retention_days = DEFAULT_RETENTION_DAYS;
        }
        self
    }

    /// Full path of the active log file
    pub fn file_path(&self) -> PathBuf {
        log_file_path(&self.path, &self.file_name)
    }

    /// Size threshold in bytes
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

/// `<temp-dir>/logs`
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("logs")
}

pub(crate) fn log_file_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(format!("{file_name}.log"))
}
