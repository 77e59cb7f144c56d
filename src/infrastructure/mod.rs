//! Infrastructure layer module
//!
//! The two components here are independent and share no state:
//! - Configuration management (file + environment layering, typed decoding)
//! - Logging infrastructure (JSON logger with a rotating file sink)

pub mod config;
pub mod logging;
