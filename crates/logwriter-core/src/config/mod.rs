//! Logger configuration
//!
//! `LoggerConfig` holds everything a `LogWriter` consults at write time.
//! It can be built in code or read from a YAML document.

mod settings;
mod file;

pub use settings::{LoggerConfig, DEFAULT_LOG_FILE};
pub use file::{ConfigError, ConfigResult};
