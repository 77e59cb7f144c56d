//! Logger setup errors.

use std::path::PathBuf;
use thiserror::Error;

/// Logger setup error types
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Level name outside debug, info, warn and error
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// The log directory could not be created
    #[error("failed to create log directory {}", path.display())]
    CreateDir {
        /// Log directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The active log file could not be opened
    #[error("failed to open log file {}", path.display())]
    OpenFile {
        /// Active log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A process-wide subscriber is already set
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] tracing::dispatcher::SetGlobalDefaultError),
}
