//! The logger exported to the Mastra CLI.
//!
//! Commands log through [`logger()`]; the binary calls [`init_cli`] once at
//! startup so those events reach stderr.

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::level::LogLevel;
use crate::logger::Logger;
use crate::subscriber::init_subscriber;
use once_cell::sync::Lazy;

pub const CLI_LOGGER_NAME: &str = "Mastra CLI";
pub const CLI_LOG_LEVEL: LogLevel = LogLevel::Debug;

/// Process-wide CLI logger.
pub static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(CLI_LOGGER_NAME, CLI_LOG_LEVEL));

pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Subscriber settings matching [`LOGGER`].
pub fn cli_config() -> LoggerConfig {
    LoggerConfig::new(CLI_LOGGER_NAME).with_level(CLI_LOG_LEVEL)
}

/// Install stderr output for the CLI logger and return it.
///
/// `LOG_FORMAT`, `NO_COLOR` and `RUST_LOG` adjust the output. `LOG_LEVEL`
/// narrows what the subscriber renders; the logger itself always stays at
/// debug.
pub fn init_cli() -> LoggerResult<&'static Logger> {
    init_subscriber(&cli_config().apply_env()?)?;
    Ok(logger())
}
