//! Test helper utilities for cli-logger integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use cli_logger::config::{LOG_FORMAT_ENV, LOG_LEVEL_ENV, NO_COLOR_ENV};

/// Remove every variable that changes how the CLI logger is configured.
pub fn clear_logger_env() {
    std::env::remove_var(LOG_LEVEL_ENV);
    std::env::remove_var(LOG_FORMAT_ENV);
    std::env::remove_var(NO_COLOR_ENV);
    std::env::remove_var("RUST_LOG");
}
