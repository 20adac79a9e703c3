//! Verbosity levels.
//!
//! [`LogLevel`] is the threshold a [`Logger`](crate::Logger) filters on. The
//! names follow the ones CLI users type in `LOG_LEVEL`, and map onto
//! `tracing` levels when events are emitted.

use crate::error::{LoggerError, LoggerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

/// Filtering threshold for log output, ordered from most to least verbose.
///
/// `None` disables output entirely.
///
/// ```rust
/// use cli_logger::LogLevel;
///
/// let level: LogLevel = "DEBUG".parse().unwrap();
/// assert!(level.enables(LogLevel::Info));
/// assert!(!LogLevel::Error.enables(LogLevel::Warn));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    None,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::None => "none",
        }
    }

    /// Whether a message at `message_level` passes this threshold.
    pub fn enables(self, message_level: LogLevel) -> bool {
        if self == Self::None || message_level == Self::None {
            return false;
        }
        message_level >= self
    }

    /// The tracing level events at this level are emitted with.
    pub fn as_tracing_level(self) -> Option<Level> {
        match self {
            Self::Debug => Some(Level::DEBUG),
            Self::Info => Some(Level::INFO),
            Self::Warn => Some(Level::WARN),
            Self::Error => Some(Level::ERROR),
            Self::None => None,
        }
    }

    /// Subscriber-side filter matching this threshold.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
            Self::None => LevelFilter::OFF,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> LoggerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "none" | "silent" | "off" => Ok(Self::None),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl From<Level> for LogLevel {
    // tracing's TRACE has no counterpart here; it folds into Debug.
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}
