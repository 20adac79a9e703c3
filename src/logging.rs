//! Logging utilities for cli-logger internals
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! These are for the crate's own diagnostics; CLI code logs through
//! [`Logger`](crate::Logger).

// Re-export tracing macros with log_* naming
pub use tracing::{
    debug as log_debug,
    error as log_error,
    trace as log_trace,
    warn as log_warn,
};
