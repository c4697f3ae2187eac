//! Reading configuration from YAML
//!
//! Configuration is only ever read; the logger never writes it back.

use std::fs;
use std::path::Path;

use super::settings::LoggerConfig;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl LoggerConfig {
    /// Parse a YAML document
    ///
    /// ```
    /// use logwriter_core::{LoggerConfig, LogLevel};
    ///
    /// let config = LoggerConfig::from_yaml_str("min_level: warn\nshow_timestamp: false\n").unwrap();
    /// assert_eq!(config.min_level, LogLevel::Warn);
    /// assert!(!config.show_timestamp);
    /// assert!(config.show_level);
    /// ```
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: LoggerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.file_logging_enabled && self.log_file_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "file logging is enabled but log_file_path is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = LoggerConfig::from_yaml_str(
            "min_level: error\nfile_logging_enabled: true\nlog_file_path: /var/log/svc.log\n",
        )
        .unwrap();

        assert_eq!(config.min_level, LogLevel::Error);
        assert!(config.file_logging_enabled);
        assert_eq!(config.log_file_path, PathBuf::from("/var/log/svc.log"));
        assert!(config.show_timestamp);
        assert!(config.colors_enabled);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(LoggerConfig::from_yaml_str("  \n").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_bad_level() {
        let result = LoggerConfig::from_yaml_str("min_level: verbose\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = LoggerConfig::from_yaml_str("file_logging_enabled: true\nlog_file_path: ''\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");

        // Missing file gives defaults
        assert_eq!(LoggerConfig::load(&path).unwrap(), LoggerConfig::default());

        fs::write(&path, "show_level: false\ndebug_enabled: true\n").unwrap();
        let config = LoggerConfig::load(&path).unwrap();
        assert!(!config.show_level);
        assert!(config.debug_enabled);
    }
}
