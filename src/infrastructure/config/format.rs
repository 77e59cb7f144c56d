//! Settings-file format detection.

use std::fmt;
use std::path::Path;

use super::error::ConfigError;

/// Supported settings-file formats, selected purely by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.env`, parsed as `KEY=value` lines
    Dotenv,
}

impl FileFormat {
    /// Map an extension (without the leading dot) to a format.
    ///
    /// Matching is exact: `JSON` is not `json`.
    pub fn from_extension(ext: &str) -> Result<Self, ConfigError> {
        match ext {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "env" => Ok(Self::Dotenv),
            other => Err(ConfigError::UnsupportedFileType(other.to_string())),
        }
    }

    /// Detect the format of `path` from the text after its last `.`.
    ///
    /// A path without any `.` yields its whole text as the "extension",
    /// which is then rejected as unsupported. A dotfile such as `.env`
    /// resolves to [`FileFormat::Dotenv`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = path.to_string_lossy();
        let ext = raw.rsplit('.').next().unwrap_or_default();
        Self::from_extension(ext)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Dotenv => "env",
        };
        f.write_str(name)
    }
}
