//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::infrastructure::config::{ConfigOptions, DEFAULT_DELIMITER};

/// Top-level command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cfgkit")]
#[command(about = "cfgkit - layered configuration and structured logging", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration source flags
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Where configuration comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Settings file (json, yaml/yml, toml or env); environment only if omitted
    #[arg(short, long, global = true, env = "CFGKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path delimiter for lookups and flattened keys
    #[arg(short, long, global = true, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}

impl SourceArgs {
    /// Loader options for these arguments
    pub fn options(&self) -> ConfigOptions {
        let options = ConfigOptions::new().with_delimiter(self.delimiter.clone());
        match &self.config {
            Some(path) => options.with_path(path),
            None => options,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged configuration
    Dump(DumpArgs),

    /// Print a single value
    Get(GetArgs),

    /// Report whether a path is present (exit status 1 if not)
    Exists(ExistsArgs),

    /// Initialize the JSON logger and emit one record
    Log(LogArgs),
}

/// Arguments for `dump`
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Print `path = value` pairs instead of nested maps
    #[arg(long)]
    pub flat: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
    pub format: DumpFormat,
}

/// Output format for `dump`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
    /// Path/value table
    Table,
}

/// Arguments for `get`
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Delimited path, e.g. `database.host`
    pub path: String,

    /// Type to read the value as
    #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
    pub kind: ValueKind,
}

/// Type a `get` reads its value as
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Text; numbers and bools are rendered
    String,
    /// Boolean, accepting yes/no and on/off forms
    Bool,
    /// 64-bit integer, floats truncated
    Int,
    /// 64-bit float
    Float,
    /// Table of strings
    Map,
}

/// Arguments for `exists`
#[derive(Args, Debug)]
pub struct ExistsArgs {
    /// Delimited path, e.g. `database.host`
    pub path: String,
}

/// Arguments for `log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Message to log
    pub message: String,

    /// Log directory (default: <temp-dir>/logs)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Log file stem (default: app)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Minimum level and level of the emitted record: debug, info, warn, error
    #[arg(long, default_value = "info")]
    pub level: String,

    /// Rotate after this many megabytes (default: 500)
    #[arg(long)]
    pub max_size_mb: Option<u64>,

    /// Rotated files to keep (default: 7)
    #[arg(long)]
    pub max_backups: Option<usize>,

    /// Days to keep rotated files (default: 7)
    #[arg(long)]
    pub retention_days: Option<u32>,

    /// Record call-site file and line
    #[arg(long)]
    pub add_source: bool,
}
