//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, OneSignalConfig, ServerConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl OneSignalConfig {
    /// Validate OneSignal provider configuration
    ///
    /// # Validation Rules
    /// - API URL must not be empty and must use http or https
    /// - Outbound timeout must be greater than 0
    ///
    /// Credentials are deliberately NOT validated here; their presence is
    /// checked per relay so a deployment without secrets still boots and
    /// fails closed on use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::validation(
                "onesignal.api_url",
                "Provider API URL is required.",
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "onesignal.api_url",
                "Provider API URL must use http or https.",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "onesignal.timeout_seconds",
                "Outbound timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Level must be a known tracing level
    /// - File format must be a known format
    /// - At least one output (console or file) must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.file.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one log output (console or file) must be enabled.",
            ));
        }

        if self.file.enabled && self.file.path.is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path is required when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete settings
    ///
    /// Runs every section validator and returns the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.onesignal.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{ConsoleSettings, FileSettings};

    #[test]
    fn test_server_config_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "server.port");
        } else {
            panic!("Expected ValidationError");
        }
    }

    #[test]
    fn test_server_config_zero_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_onesignal_config_valid_without_credentials() {
        // A deployment without secrets is valid at load time
        assert!(OneSignalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_onesignal_config_empty_api_url() {
        let config = OneSignalConfig {
            api_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_onesignal_config_bad_scheme() {
        let config = OneSignalConfig {
            api_url: "ftp://onesignal.com/api".to_string(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "onesignal.api_url");
        } else {
            panic!("Expected ValidationError");
        }
    }

    #[test]
    fn test_onesignal_config_zero_timeout() {
        let config = OneSignalConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let settings = LoggerSettings {
            file: FileSettings {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_settings_no_outputs() {
        let settings = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            file: FileSettings {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_all_sections() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.onesignal.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }
}
