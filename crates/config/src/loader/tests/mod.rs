//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test the end-to-end pipeline with in-memory sources.
//! - Test failure policies, success callbacks, and prefix filtering.
//! - Test loading from the live process environment and `.env` files.
//!
//! Does NOT handle:
//! - Coercion and message details in isolation (tested in `schema` and `engine`).
//! - Router integration (tested in `decoration.rs`).
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - Every load under the `Exit` policy injects a `RecordingTerminator`,
//!   never `ProcessExit`, success paths included.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::loader::EnvOptions;
use crate::testing::{RecordingReporter, RecordingTerminator};

pub mod dotenv_tests;
pub mod on_error_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

pub fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Options reading from `pairs`, with recorders in place of stderr and exit.
pub fn recorded_options(
    pairs: &[(&str, &str)],
) -> (EnvOptions, RecordingReporter, RecordingTerminator) {
    with_recorders(EnvOptions::new().env_source(source(pairs)))
}

/// Swap stderr and process exit on `options` for recorders.
pub fn with_recorders(
    options: EnvOptions,
) -> (EnvOptions, RecordingReporter, RecordingTerminator) {
    let reporter = RecordingReporter::new();
    let terminator = RecordingTerminator::new();
    let options = options
        .reporter(reporter.clone())
        .terminator(terminator.clone());
    (options, reporter, terminator)
}
