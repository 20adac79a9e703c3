// Test modules for cli-logger crate
//
// Each source file has a corresponding test file that focuses on behavior
// verification. Shared fixtures live in helpers.

// Output capture and config fixtures
pub mod helpers;

pub mod config;
