//! cfgkit - layered configuration and structured logging
//!
//! Two independent building blocks for a service's startup path:
//!
//! - **Configuration** ([`ConfigManager`]): merges a JSON, YAML, TOML or
//!   dotenv settings file with environment variable overrides and decodes
//!   the result into any `serde` type, or answers typed point lookups.
//! - **Logging** ([`Logger`]): JSON records to stdout and to a size-rotated
//!   log file, returned as an explicit handle that can be installed as the
//!   global default once.
//!
//! # Example
//!
//! ```no_run
//! use cfgkit::{ConfigManager, ConfigOptions, LogConfig, Logger};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     log: LogConfig,
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut config = ConfigManager::new(ConfigOptions::new().with_path("settings.yaml"));
//!     let settings: Settings = config.load()?;
//!
//!     let _logger = Logger::init(settings.log)?;
//!     tracing::info!(port = config.get_int("server.port")?, "starting");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use infrastructure::config::{ConfigError, ConfigManager, ConfigOptions, DecodeMode, FileFormat};
pub use infrastructure::logging::{LogConfig, LogLevel, Logger, LoggingError};
