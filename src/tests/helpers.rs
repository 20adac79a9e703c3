//! Test helper utilities for cli-logger tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::{LogFormat, LoggerConfig};
use crate::level::LogLevel;
use crate::subscriber::build_subscriber;
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory writer shared between the subscriber and the test.
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("capture lock poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("capture lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Config with colors off so assertions can match plain text.
pub fn test_config(name: &str, level: LogLevel, format: LogFormat) -> LoggerConfig {
    LoggerConfig::new(name)
        .with_level(level)
        .with_format(format)
        .with_ansi(false)
        .with_target(true)
}

/// Run `f` with a scoped subscriber for `config` and return what it wrote.
pub fn capture<F: FnOnce()>(config: &LoggerConfig, f: F) -> CapturedOutput {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = build_subscriber(config, move || writer.clone());
    tracing::subscriber::with_default(subscriber, f);
    output
}

/// Parse every captured line as a JSON event.
pub fn json_events(output: &CapturedOutput) -> Vec<serde_json::Value> {
    output
        .lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("subscriber should emit JSON lines"))
        .collect()
}

/// JSON events emitted through a `Logger` (crate diagnostics filtered out).
pub fn logger_events(output: &CapturedOutput) -> Vec<serde_json::Value> {
    json_events(output)
        .into_iter()
        .filter(|event| event["target"] == crate::logger::LOG_TARGET)
        .collect()
}
