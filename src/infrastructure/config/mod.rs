//! Configuration management infrastructure
//!
//! Layered configuration using figment:
//! - JSON, YAML, TOML or dotenv settings file (format chosen by extension)
//! - Environment variable overrides (`DATABASE_HOST` -> `database.host`)
//! - Typed decoding, nested or flat-path
//! - Typed point lookups by delimited path

pub mod error;
pub mod format;
pub mod loader;
pub mod options;
pub mod value;

pub use error::ConfigError;
pub use format::FileFormat;
pub use loader::ConfigManager;
pub use options::{ConfigOptions, DecodeMode, DEFAULT_DELIMITER};
pub use value::{env_var_path, flatten_json};
