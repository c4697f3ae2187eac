//! Logger settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Default file sink path, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Settings consulted by a `LogWriter` on every record
///
/// Missing fields in a YAML document take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are dropped
    pub min_level: LogLevel,
    /// Whether records are also appended to `log_file_path`
    pub file_logging_enabled: bool,
    pub log_file_path: PathBuf,
    /// Prefix console lines with `[HH:MM:SS.mmm]`
    pub show_timestamp: bool,
    /// Prefix console lines with `[TAG]`
    pub show_level: bool,
    /// Whether debug-level records are emitted at all
    pub debug_enabled: bool,
    /// Whether the stdout sink emits color attributes
    pub colors_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            file_logging_enabled: false,
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
            show_timestamp: true,
            show_level: true,
            debug_enabled: cfg!(debug_assertions),
            colors_enabled: true,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enable the file sink at `path`
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_logging_enabled = true;
        self.log_file_path = path.into();
        self
    }

    pub fn with_display(mut self, show_timestamp: bool, show_level: bool) -> Self {
        self.show_timestamp = show_timestamp;
        self.show_level = show_level;
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(!config.file_logging_enabled);
        assert_eq!(config.log_file_path, PathBuf::from("app.log"));
        assert!(config.show_timestamp);
        assert!(config.show_level);
        assert_eq!(config.debug_enabled, cfg!(debug_assertions));
    }

    #[test]
    fn test_builders() {
        let config = LoggerConfig::new()
            .with_min_level(LogLevel::Warn)
            .with_file("logs/run.log")
            .with_display(false, true)
            .with_debug(true)
            .with_colors(false);

        assert_eq!(config.min_level, LogLevel::Warn);
        assert!(config.file_logging_enabled);
        assert_eq!(config.log_file_path, PathBuf::from("logs/run.log"));
        assert!(!config.show_timestamp);
        assert!(config.show_level);
        assert!(config.debug_enabled);
        assert!(!config.colors_enabled);
    }
}
