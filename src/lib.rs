//! # cli-logger
//!
//! The named, leveled logger instance used by the Mastra command-line tool.
//!
//! ## Key Features
//!
//! - **Exported instance**: [`logger()`] is named `"Mastra CLI"` and logs at debug
//! - **Configurable loggers**: [`create_logger`] builds other named handles from a [`LoggerConfig`]
//! - **Delegated output**: events go through `tracing`; `tracing-subscriber` renders them
//!   as pretty, compact or JSON lines on stderr
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> cli_logger::LoggerResult<()> {
//! let logger = cli_logger::init_cli()?;
//! logger.info("Building project");
//! logger.debug("Bundler options resolved");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod subscriber;

#[cfg(test)]
pub mod tests;

pub use cli::{cli_config, init_cli, logger, CLI_LOGGER_NAME, CLI_LOG_LEVEL, LOGGER};
pub use config::{LogFormat, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use level::LogLevel;
pub use logger::{create_logger, Logger, LOG_TARGET};
pub use subscriber::{build_subscriber, init_subscriber};
