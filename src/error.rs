//! Error types for logger setup.
//!
//! Everything that can go wrong while configuring the CLI logger surfaces as a
//! [`LoggerError`]. Emitting log events never fails; only parsing levels and
//! formats, validating a [`LoggerConfig`](crate::LoggerConfig) and installing
//! the global subscriber do.
//!
//! # Result Type
//!
//! Use [`LoggerResult<T>`] as a convenient alias for `Result<T, LoggerError>`:
//!
//! ```rust
//! use cli_logger::{LogLevel, LoggerResult};
//!
//! fn parse_flag(value: &str) -> LoggerResult<LogLevel> {
//!     value.parse()
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Convenient result type for logger setup.
pub type LoggerResult<T> = std::result::Result<T, LoggerError>;

/// Errors that can occur while configuring or installing a logger.
///
/// Use the constructor methods, which record the failure as a tracing event:
///
/// ```rust
/// use cli_logger::LoggerError;
///
/// let err = LoggerError::invalid_level("loud");
/// assert!(err.is_configuration_error());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// A verbosity level string did not name a known level.
    ///
    /// Accepted: `debug`, `info`, `warn`/`warning`, `error`, `none`/`silent`/`off`.
    #[error("Invalid log level: {value}")]
    InvalidLevel {
        /// The rejected input.
        value: String,
    },

    /// An output format string did not name a known format.
    #[error("Invalid log format: {value}")]
    InvalidFormat {
        /// The rejected input.
        value: String,
    },

    /// The logger configuration is incomplete or inconsistent.
    #[error("Logger configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The global subscriber could not be installed.
    ///
    /// Usually means another subscriber was already set for the process.
    #[error("Failed to install log subscriber: {message}")]
    SubscriberInit {
        /// Details reported by tracing-subscriber.
        message: String,
    },
}

impl LoggerError {
    /// Whether the caller can fix this by changing configuration input.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::InvalidLevel { .. } => true,
            Self::InvalidFormat { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::SubscriberInit { .. } => false,
        }
    }

    /// Message suitable for printing to a CLI user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidLevel { value } => format!(
                "Unknown log level '{value}'. Use one of: debug, info, warn, error, none"
            ),
            Self::InvalidFormat { value } => {
                format!("Unknown log format '{value}'. Use one of: pretty, compact, json")
            }
            Self::ConfigurationError { message } => format!("Logger misconfigured: {message}"),
            Self::SubscriberInit { .. } => "Logging was already initialized".to_string(),
        }
    }

    pub fn invalid_level(value: impl Into<String>) -> Self {
        let value = value.into();
        log_warn!(
            error_type = "invalid_level",
            value = %value,
            "Rejected unknown log level"
        );
        Self::InvalidLevel { value }
    }

    pub fn invalid_format(value: impl Into<String>) -> Self {
        let value = value.into();
        log_warn!(
            error_type = "invalid_format",
            value = %value,
            "Rejected unknown log format"
        );
        Self::InvalidFormat { value }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            details = %message,
            "Logger configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    // Not logged: the subscriber that would receive the event is the one that failed.
    pub fn subscriber_init(message: impl Into<String>) -> Self {
        Self::SubscriberInit {
            message: message.into(),
        }
    }
}
