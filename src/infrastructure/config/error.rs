//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file extension maps to no known format
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The settings file could not be read
    #[error("failed to read config file {}", path.display())]
    Read {
        /// Settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid for its format
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Settings file
        path: PathBuf,
        /// Parser error
        #[source]
        source: Box<figment::Error>,
    },

    // Line contents are never echoed: dotenv files routinely carry secrets.
    /// A dotenv line could not be parsed
    #[error("failed to parse dotenv file {}", path.display())]
    Dotenv {
        /// Dotenv file
        path: PathBuf,
        /// Parser error
        #[source]
        source: dotenvy::Error,
    },

    /// The merged store does not fit the target type
    #[error("failed to decode configuration: {0}")]
    Decode(#[source] Box<figment::Error>),

    /// No value at the requested path
    #[error("config path: {0} not found")]
    PathNotFound(String),

    /// The value at the path cannot be coerced to the requested type
    #[error("config path: {path} cannot be read as {expected}")]
    TypeMismatch {
        /// Requested path
        path: String,
        /// Requested type
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn decode(err: figment::Error) -> Self {
        Self::Decode(Box::new(err))
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, err: figment::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source: Box::new(err),
        }
    }
}
