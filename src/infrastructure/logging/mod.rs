//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON records duplicated to stdout and a log file
//! - Size based rotation with age and count based pruning
//! - Explicit logger handle, optionally installed as the global default

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod rotation;

pub use config::{default_log_dir, LogConfig};
pub use error::LoggingError;
pub use level::LogLevel;
pub use logger::{debug, error, info, instrument, warn, Logger};
pub use rotation::{RotatingFile, RotationPolicy};
