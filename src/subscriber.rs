//! Subscriber installation.
//!
//! Output for every [`Logger`](crate::Logger) is rendered by a
//! `tracing-subscriber` fmt layer in the format chosen by
//! [`LoggerConfig::format`]. The CLI installs it once, globally, on stderr so
//! stdout stays free for command output:
//!
//! ```rust,no_run
//! use cli_logger::{init_subscriber, LoggerConfig, LogLevel};
//!
//! # fn main() -> cli_logger::LoggerResult<()> {
//! init_subscriber(&LoggerConfig::new("Mastra CLI").with_level(LogLevel::Debug))?;
//! # Ok(())
//! # }
//! ```
//!
//! `RUST_LOG` takes precedence over the configured level when it holds valid
//! directives, e.g. `RUST_LOG=cli=warn`. A blank or unparseable `RUST_LOG` is
//! ignored.

use crate::config::{LogFormat, LoggerConfig};
use crate::error::{LoggerError, LoggerResult};
use crate::level::LogLevel;
use crate::logging::log_trace;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::Filter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Build a subscriber for `config` that writes to `make_writer`.
///
/// Nothing is installed; use with `tracing::subscriber::with_default` or
/// `set_global_default`. Filtering uses the configured level only.
pub fn build_subscriber<W>(
    config: &LoggerConfig,
    make_writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    build_filtered(config, config.level.to_level_filter(), make_writer)
}

/// Install the global subscriber writing to stderr.
///
/// # Errors
///
/// - [`LoggerError::ConfigurationError`] if `config` fails validation
/// - [`LoggerError::SubscriberInit`] if a global subscriber is already set
pub fn init_subscriber(config: &LoggerConfig) -> LoggerResult<()> {
    config.validate()?;

    let filter = env_filter(config);
    let effective = effective_level(&filter, config.level);
    let subscriber = build_filtered(config, filter, std::io::stderr);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggerError::subscriber_init(e.to_string()))?;

    log_trace!(
        logger = %config.name,
        level = %config.level,
        effective_level = %effective,
        format = %config.format,
        "Log subscriber installed"
    );
    Ok(())
}

/// `RUST_LOG` directives when set, non-blank and valid; otherwise the config level.
pub(crate) fn env_filter(config: &LoggerConfig) -> EnvFilter {
    let fallback =
        || EnvFilter::default().add_directive(config.level.to_level_filter().into());

    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| fallback())
        }
        _ => fallback(),
    }
}

/// Most verbose level `filter` lets through; `fallback` when it gives no hint.
pub(crate) fn effective_level(filter: &EnvFilter, fallback: LogLevel) -> LogLevel {
    match <EnvFilter as Layer<Registry>>::max_level_hint(filter) {
        Some(hint) => hint.into_level().map_or(LogLevel::None, LogLevel::from),
        None => fallback,
    }
}

fn build_filtered<F, W>(
    config: &LoggerConfig,
    filter: F,
    make_writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    F: Filter<Registry> + Send + Sync + 'static,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt_layer(config, make_writer).with_filter(filter);
    Box::new(tracing_subscriber::registry().with(layer))
}

fn fmt_layer<W>(config: &LoggerConfig, make_writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(make_writer)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Pretty => layer.pretty().with_ansi(config.ansi).boxed(),
        LogFormat::Compact => layer.compact().with_ansi(config.ansi).boxed(),
        // JSON consumers never want escape codes.
        LogFormat::Json => layer.json().with_ansi(false).boxed(),
    }
}
