use crate::error::{LoggerError, LoggerResult};
use crate::level::LogLevel;
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding the verbosity level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable overriding the output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
/// Presence of this variable disables colored output (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// How events are rendered by the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human readable output.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> LoggerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LoggerError::invalid_format(s)),
        }
    }
}

/// Configuration for a named logger and the subscriber that renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Human-readable component name attached to every event.
    pub name: String,
    pub level: LogLevel,
    pub format: LogFormat,
    /// Colored output; ignored for JSON.
    pub ansi: bool,
    /// Include the tracing target (module path) in rendered events.
    pub with_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            level: LogLevel::default(),
            format: LogFormat::default(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Validate logger configuration
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ConfigurationError`] if the name is empty or
    /// whitespace only.
    pub fn validate(&self) -> LoggerResult<()> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::configuration_error(
                "Logger name must not be empty",
            ));
        }
        Ok(())
    }

    /// Apply `LOG_LEVEL`, `LOG_FORMAT` and `NO_COLOR` overrides.
    ///
    /// Unset variables leave the current value alone; set but unparseable
    /// values are rejected.
    pub fn apply_env(mut self) -> LoggerResult<Self> {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.level = level.parse()?;
        }
        if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
            self.format = format.parse()?;
        }
        if std::env::var_os(NO_COLOR_ENV).is_some() {
            self.ansi = false;
        }

        log_debug!(
            logger = %self.name,
            level = %self.level,
            format = %self.format,
            ansi = self.ansi,
            "Logger configuration loaded from environment"
        );

        Ok(self)
    }

    pub fn from_env(name: impl Into<String>) -> LoggerResult<Self> {
        Self::new(name).apply_env()
    }
}
