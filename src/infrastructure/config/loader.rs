//! Layered loading: settings file, then environment, then decode.

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::value::{Dict, Value};
use figment::Figment;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::format::FileFormat;
use super::options::{ConfigOptions, DecodeMode};
use super::value::{self, env_var_path};

/// Separator figment uses for key paths
const FIGMENT_DELIMITER: &str = ".";

/// Configuration loader with layered merging
///
/// Precedence (lowest to highest):
/// 1. Settings file (`json`, `yaml`/`yml`, `toml` or `env`), if configured
/// 2. Process environment variables (`DATABASE_HOST` -> `database.host`)
///
/// The store is rebuilt from scratch on every [`load`](Self::load) or
/// [`merge_sources`](Self::merge_sources); lookups read the last build.
pub struct ConfigManager {
    options: ConfigOptions,
    figment: Figment,
}

impl ConfigManager {
    /// Create a loader; nothing is read until `load` or `merge_sources`
    pub fn new(options: ConfigOptions) -> Self {
        Self {
            options: options.normalized(),
            figment: Figment::new(),
        }
    }

    /// Options in effect (after defaults)
    pub const fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Merge file and environment, then decode the result into `T`
    pub fn load<T: DeserializeOwned>(&mut self) -> Result<T, ConfigError> {
        self.merge_sources()?;
        self.decode()
    }

    /// Rebuild the store from the settings file and the environment
    pub fn merge_sources(&mut self) -> Result<(), ConfigError> {
        let mut figment = Figment::new();

        if let Some(path) = self.options.path.clone() {
            let settings = Self::read_file(&path, &self.options.delimiter)?;
            figment = figment.merge(Serialized::defaults(settings));
        }

        figment = figment.merge(Self::env_provider());

        self.figment = figment;
        debug!(
            file = ?self.options.path,
            delimiter = %self.options.delimiter,
            "merged configuration sources"
        );
        Ok(())
    }

    /// Decode the current store into `T` according to the decode mode
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        match self.options.decode {
            DecodeMode::Nested => self.figment.extract().map_err(ConfigError::decode),
            DecodeMode::FlatPaths => {
                let flat = value::flatten(&self.tree()?, &self.options.delimiter);
                Figment::from(Serialized::defaults(flat))
                    .extract()
                    .map_err(ConfigError::decode)
            }
        }
    }

    /// Whether `path` is present in the store
    ///
    /// A path with an empty segment (`""`, `a.`, `a..b`) is never present.
    pub fn exists(&self, path: &str) -> bool {
        self.figment_key(path)
            .is_some_and(|key| self.figment.find_value(&key).is_ok())
    }

    /// String at `path`; numbers and bools are rendered as text
    pub fn get_string(&self, path: &str) -> Result<String, ConfigError> {
        value::to_string(path, &self.lookup(path)?)
    }

    /// Bool at `path`; accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
    pub fn get_bool(&self, path: &str) -> Result<bool, ConfigError> {
        value::to_bool(path, &self.lookup(path)?)
    }

    /// Integer at `path`; floats truncate toward zero
    pub fn get_int(&self, path: &str) -> Result<i64, ConfigError> {
        value::to_int(path, &self.lookup(path)?)
    }

    /// Float at `path`
    pub fn get_float64(&self, path: &str) -> Result<f64, ConfigError> {
        value::to_float(path, &self.lookup(path)?)
    }

    /// Map at `path` with every entry rendered as a string
    pub fn get_map_string(&self, path: &str) -> Result<BTreeMap<String, String>, ConfigError> {
        value::to_string_map(path, &self.lookup(path)?)
    }

    /// The whole merged store as nested maps
    pub fn get_all(&self) -> serde_json::Map<String, serde_json::Value> {
        let Ok(tree) = self.tree() else {
            return serde_json::Map::new();
        };

        tree.keys()
            .filter_map(|key| match self.figment.extract_inner::<serde_json::Value>(key) {
                Ok(value) => Some((key.clone(), value)),
                Err(err) => {
                    warn!(key = %key, error = %err, "skipping unrenderable configuration key");
                    None
                }
            })
            .collect()
    }

    fn lookup(&self, path: &str) -> Result<serde_json::Value, ConfigError> {
        let key = self
            .figment_key(path)
            .filter(|key| self.figment.find_value(key).is_ok())
            .ok_or_else(|| ConfigError::PathNotFound(path.to_string()))?;

        self.figment.extract_inner(&key).map_err(ConfigError::decode)
    }

    fn tree(&self) -> Result<Dict, ConfigError> {
        self.figment.extract().map_err(ConfigError::decode)
    }

    /// Figment key for a caller path; `None` when a segment is empty
    fn figment_key(&self, path: &str) -> Option<String> {
        let segments: Vec<&str> = path.split(self.options.delimiter.as_str()).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }
        Some(segments.join(FIGMENT_DELIMITER))
    }

    /// Every process variable, lowercased, `_` splitting into nested keys.
    fn env_provider() -> Env {
        Env::raw().filter_map(|name| env_key(name.as_str()).map(Into::into))
    }

    /// Parse the settings file; keys holding the delimiter are split into
    /// nested tables, so `{"log.level": ..}` is reachable as `log.level`.
    fn read_file(path: &Path, delimiter: &str) -> Result<Dict, ConfigError> {
        let format = FileFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match format {
            FileFormat::Json => Figment::from(Json::string(&contents)),
            FileFormat::Yaml => Figment::from(Yaml::string(&contents)),
            FileFormat::Toml => Figment::from(Toml::string(&contents)),
            FileFormat::Dotenv => Self::dotenv_figment(path, &contents)?,
        };

        let dict: Dict = parsed
            .extract()
            .map_err(|err| ConfigError::parse(path, err))?;
        let dict = value::unflatten(value::flatten(&dict, delimiter), delimiter);

        debug!(
            path = %path.display(),
            format = %format,
            keys = dict.len(),
            "loaded configuration file"
        );
        Ok(dict)
    }

    /// Dotenv entries are keyed exactly like process environment variables.
    fn dotenv_figment(path: &Path, contents: &str) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new();

        for entry in dotenvy::from_read_iter(contents.as_bytes()) {
            let (name, raw) = entry.map_err(|source| ConfigError::Dotenv {
                path: path.to_path_buf(),
                source,
            })?;

            let Some(key) = env_key(&name) else {
                continue;
            };
            let parsed = raw.parse::<Value>().unwrap_or_else(|_| Value::from(raw.clone()));
            figment = figment.merge(Serialized::default(&key, parsed));
        }

        Ok(figment)
    }
}

/// Figment key for an env-style name; names with empty segments (`_`,
/// `__X`, `A__B`) have no path and are skipped.
fn env_key(name: &str) -> Option<String> {
    let key = env_var_path(name, FIGMENT_DELIMITER);
    key.split(FIGMENT_DELIMITER)
        .all(|segment| !segment.is_empty())
        .then_some(key)
}
