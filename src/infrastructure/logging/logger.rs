//! JSON logger construction and installation.

use std::io;
use std::path::{Path, PathBuf};
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use super::config::LogConfig;
use super::error::LoggingError;
use super::level::LogLevel;
use super::rotation::{RotatingFile, RotationPolicy};

/// Handle to a configured JSON logger
///
/// Every record goes to stdout and to the rotating file
/// `<path>/<file_name>.log`. The handle owns the background writer for the
/// file; dropping it flushes pending records and stops the file sink, so
/// `Logger::init(config)?;` on its own loses everything after the first
/// record.
#[must_use = "dropping the logger stops writes to the log file"]
pub struct Logger {
    dispatch: Dispatch,
    config: LogConfig,
    level: LogLevel,
    _guard: WorkerGuard,
}

impl Logger {
    /// Build the logger and install it as the process-wide default
    ///
    /// Meant to run once at startup, before anything logs. The returned
    /// handle must be kept alive for the file sink to keep writing.
    pub fn init(config: LogConfig) -> Result<Self, LoggingError> {
        let logger = Self::build(config)?;
        logger.install()?;

        tracing::info!(
            level = %logger.level,
            file = %logger.file_path().display(),
            max_file_size_mb = logger.config.max_file_size_mb,
            max_backups = logger.config.max_backups,
            retention_days = logger.config.retention_days,
            "logger initialized"
        );

        Ok(logger)
    }

    /// Build the logger without touching global state
    ///
    /// Use [`dispatch`](Self::dispatch) to pass it explicitly, or
    /// [`in_scope`](Self::in_scope) to run code against it.
    ///
    /// # Errors
    /// Returns an error for an unknown level or when the log directory or
    /// file cannot be created
    pub fn build(config: LogConfig) -> Result<Self, LoggingError> {
        let config = config.with_defaults();
        let level: LogLevel = config.level.parse()?;

        let rotating = RotatingFile::open(
            &config.path,
            config.file_name.clone(),
            RotationPolicy {
                max_size: config.max_file_size_bytes(),
                max_backups: config.max_backups,
                retention_days: config.retention_days,
            },
        )?;
        let (file_writer, guard) = tracing_appender::non_blocking(rotating);

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stdout.and(file_writer))
            .with_ansi(false)
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_file(config.add_source)
            .with_line_number(config.add_source)
            .with_filter(EnvFilter::new(level.as_str()));

        let subscriber = tracing_subscriber::registry().with(json_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            config,
            level,
            _guard: guard,
        })
    }

    /// Set this logger as the process-wide default
    ///
    /// # Errors
    /// Fails if any global subscriber was already installed
    pub fn install(&self) -> Result<(), LoggingError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())?;
        Ok(())
    }

    /// Run `f` with this logger as the thread's default
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Dispatcher for explicit passing
    pub const fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Resolved minimum level
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Config after defaults were applied
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Active log file
    pub fn file_path(&self) -> PathBuf {
        self.config.file_path()
    }

    /// Directory holding the active file and its backups
    pub fn log_dir(&self) -> &Path {
        &self.config.path
    }
}

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, warn};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, level: &str) -> LogConfig {
        LogConfig {
            path: dir.path().to_path_buf(),
            level: level.to_string(),
            ..LogConfig::default()
        }
    }

    fn records(path: &Path) -> Vec<serde_json::Value> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_build_rejects_invalid_level() {
        let temp_dir = TempDir::new().unwrap();
        let result = Logger::build(config_in(&temp_dir, "verbose"));
        assert!(matches!(result, Err(LoggingError::InvalidLevel(ref l)) if l == "verbose"));
    }

    #[test]
    fn test_build_accepts_mixed_case_level() {
        let temp_dir = TempDir::new().unwrap();
        let upper = Logger::build(config_in(&temp_dir, "INFO")).unwrap();
        let lower = Logger::build(config_in(&temp_dir, "info")).unwrap();
        assert_eq!(upper.level(), LogLevel::Info);
        assert_eq!(upper.level(), lower.level());
    }

    #[test]
    fn test_build_applies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::build(config_in(&temp_dir, "")).unwrap();
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.config().file_name, "app");
        assert_eq!(logger.config().max_file_size_mb, 500);
        assert_eq!(logger.config().max_backups, 7);
        assert_eq!(logger.config().retention_days, 7);
        assert_eq!(logger.file_path(), temp_dir.path().join("app.log"));
        assert_eq!(logger.log_dir(), temp_dir.path());
    }

    #[test]
    fn test_records_are_json_lines_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::build(LogConfig {
            file_name: "svc".to_string(),
            ..config_in(&temp_dir, "info")
        })
        .unwrap();
        let path = logger.file_path();

        logger.in_scope(|| {
            info!(request_id = 42, "handled request");
            debug!("too chatty to keep");
            error!("something broke");
        });
        drop(logger);

        let records = records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["level"], "INFO");
        assert_eq!(records[0]["fields"]["message"], "handled request");
        assert_eq!(records[0]["fields"]["request_id"], 42);
        assert!(records[0]["target"].as_str().unwrap().starts_with("cfgkit"));
        assert!(records[0].get("filename").is_none());
        assert_eq!(records[1]["level"], "ERROR");
    }

    #[test]
    fn test_add_source_records_call_site() {
        let temp_dir = TempDir::new().unwrap();
        let logger = Logger::build(LogConfig {
            add_source: true,
            ..config_in(&temp_dir, "debug")
        })
        .unwrap();
        let path = logger.file_path();

        logger.in_scope(|| debug!("with source"));
        drop(logger);

        let records = records(&path);
        assert_eq!(records.len(), 1);
        assert!(records[0]["filename"].as_str().unwrap().ends_with("logger.rs"));
        assert!(records[0]["line_number"].is_u64());
    }

    #[test]
    fn test_build_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let result = Logger::build(LogConfig {
            path: blocker.join("logs"),
            ..LogConfig::default()
        });
        assert!(matches!(result, Err(LoggingError::CreateDir { .. })));
    }
}
