//! Logger configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for file logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Shortened single-line format
    Compact,
    /// Structured JSON, one event per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            )),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Whether console output is enabled
    pub enabled: bool,
    /// Whether to use colored output (only applied on a TTY)
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Whether file output is enabled
    pub enabled: bool,
    /// Path to the log file
    pub path: PathBuf,
    /// Whether to append to an existing file
    pub append: bool,
    /// Output format
    pub format: LogFormat,
}

impl FileConfig {
    pub fn new(enabled: bool, path: PathBuf, append: bool, format: LogFormat) -> Self {
        Self {
            enabled,
            path,
            append,
            format,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/pushgate.log"),
            append: true,
            format: LogFormat::Json,
        }
    }
}

/// Complete logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Log level directive, e.g. "info" or "pushgate=debug,info"
    pub level: String,
    /// Console output configuration
    pub console: ConsoleConfig,
    /// File output configuration
    pub file: FileConfig,
}

impl LoggerConfig {
    /// Create a new logger configuration
    ///
    /// # Errors
    /// Returns an error if both outputs are disabled, or if file output is
    /// enabled without a path.
    pub fn new(
        console: ConsoleConfig,
        file: FileConfig,
        level: String,
    ) -> Result<Self, String> {
        let config = Self {
            level,
            console,
            file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.console.enabled && !self.file.enabled {
            return Err("At least one output (console or file) must be enabled".to_string());
        }

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err("Log file path is required when file output is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}
