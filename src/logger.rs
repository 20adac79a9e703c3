//! Named logger handle.
//!
//! A [`Logger`] pairs a component name with a [`LogLevel`] threshold and
//! forwards messages that pass the threshold to `tracing`. Formatting and
//! output are left to whichever subscriber is installed (see
//! [`subscriber`](crate::subscriber)).
//!
//! # Example
//!
//! ```rust
//! use cli_logger::{create_logger, LogLevel, LoggerConfig};
//! use serde_json::json;
//!
//! # fn main() -> cli_logger::LoggerResult<()> {
//! let logger = create_logger(&LoggerConfig::new("Deployer").with_level(LogLevel::Debug))?;
//! logger.info("Starting deploy");
//! logger.debug_with("Resolved project", &json!({ "dir": "./app", "files": 12 }));
//! # Ok(())
//! # }
//! ```

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::level::LogLevel;
use crate::logging::log_trace;
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Tracing target of every event emitted through a [`Logger`].
pub const LOG_TARGET: &str = "cli";

macro_rules! emit {
    ($mac:ident, $name:expr, $message:expr, $context:expr) => {
        match $context {
            Some(context) => tracing::$mac!(
                target: LOG_TARGET,
                logger = $name,
                context = %context,
                "{}",
                $message
            ),
            None => tracing::$mac!(target: LOG_TARGET, logger = $name, "{}", $message),
        }
    };
}

/// A named handle used to emit leveled diagnostic messages.
///
/// Cloning is cheap; clones share the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: Arc<str>,
    level: LogLevel,
}

/// Build a [`Logger`] from a validated configuration.
///
/// # Errors
///
/// Returns [`LoggerError::ConfigurationError`](crate::LoggerError::ConfigurationError)
/// when the config fails [`LoggerConfig::validate`].
pub fn create_logger(config: &LoggerConfig) -> LoggerResult<Logger> {
    config.validate()?;
    let logger = Logger::new(config.name.trim(), config.level);
    log_trace!(logger = %logger.name, level = %logger.level, "Logger created");
    Ok(logger)
}

impl Logger {
    pub fn new(name: impl Into<Arc<str>>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Same name, different threshold.
    pub fn with_level(&self, level: LogLevel) -> Self {
        Self {
            name: Arc::clone(&self.name),
            level,
        }
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level.enables(level)
    }

    /// Emit `message` at `level`, optionally with structured context.
    ///
    /// Dropped without formatting when `level` is below this logger's
    /// threshold. `LogLevel::None` is never emitted.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display, context: Option<&Value>) {
        if !self.is_enabled(level) {
            return;
        }
        let name: &str = &self.name;
        match level {
            LogLevel::Debug => emit!(debug, name, message, context),
            LogLevel::Info => emit!(info, name, message, context),
            LogLevel::Warn => emit!(warn, name, message, context),
            LogLevel::Error => emit!(error, name, message, context),
            LogLevel::None => {}
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message, None);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message, None);
    }

    pub fn debug_with(&self, message: impl fmt::Display, context: &Value) {
        self.log(LogLevel::Debug, message, Some(context));
    }

    pub fn info_with(&self, message: impl fmt::Display, context: &Value) {
        self.log(LogLevel::Info, message, Some(context));
    }

    pub fn warn_with(&self, message: impl fmt::Display, context: &Value) {
        self.log(LogLevel::Warn, message, Some(context));
    }

    pub fn error_with(&self, message: impl fmt::Display, context: &Value) {
        self.log(LogLevel::Error, message, Some(context));
    }

    /// Log an error together with its `source()` chain at error level.
    pub fn track_exception(&self, error: &(dyn Error + 'static)) {
        self.error(error_chain(error));
    }
}

/// `"outer: cause: root cause"`
pub(crate) fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
