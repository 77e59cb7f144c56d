//! Loader options.

use std::path::PathBuf;

/// Default path delimiter
pub const DEFAULT_DELIMITER: &str = ".";

/// How the merged store is shaped before it is handed to serde
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Struct nesting mirrors the path hierarchy (`database.host` lands in
    /// `database: Database { host }`).
    #[default]
    Nested,
    /// Every leaf is flattened into a single key joined by the delimiter, so
    /// a plain field tagged `#[serde(rename = "database.host")]` binds it.
    FlatPaths,
}

/// Options for [`ConfigManager`](super::ConfigManager)
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Path delimiter; empty falls back to [`DEFAULT_DELIMITER`]
    pub delimiter: String,
    /// Optional settings file; `None` (or an empty path) means env-only
    pub path: Option<PathBuf>,
    /// Decode mode used by `load`
    pub decode: DecodeMode,
}

impl ConfigOptions {
    /// Options with the default delimiter and no settings file
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settings file
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the path delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the decode mode
    #[must_use]
    pub const fn with_decode(mut self, decode: DecodeMode) -> Self {
        self.decode = decode;
        self
    }

    /// Fill unset fields with defaults
    pub(crate) fn normalized(mut self) -> Self {
        if self.delimiter.is_empty() {
            self.delimiter = DEFAULT_DELIMITER.to_string();
        }
        if self
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.path = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_defaults_delimiter() {
        let options = ConfigOptions::new().normalized();
        assert_eq!(options.delimiter, ".");
        assert!(options.path.is_none());
        assert_eq!(options.decode, DecodeMode::Nested);
    }

    #[test]
    fn test_normalized_keeps_custom_delimiter() {
        let options = ConfigOptions::new().with_delimiter("/").normalized();
        assert_eq!(options.delimiter, "/");
    }

    #[test]
    fn test_normalized_drops_empty_path() {
        let options = ConfigOptions::new().with_path("").normalized();
        assert!(options.path.is_none());
    }
}
