//! Testing utilities for code that embeds the loader.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//! The recorders stand in for the console and process exit so failure
//! policies can be observed without ending the test process.
//!
//! # Example
//! ```ignore
//! use envgate_config::testing::{RecordingReporter, RecordingTerminator};
//!
//! let reporter = RecordingReporter::new();
//! let terminator = RecordingTerminator::new();
//! let options = EnvOptions::new()
//!     .reporter(reporter.clone())
//!     .terminator(terminator.clone());
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::policy::{Reporter, Terminator};
use crate::report::ErrorReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChannel {
    Error,
    Warn,
}

/// One call to a `Reporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub channel: ReportChannel,
    pub label: String,
    pub report: ErrorReport,
}

/// Reporter that keeps every report in memory. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    records: Arc<Mutex<Vec<ReportRecord>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ReportRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, channel: ReportChannel, label: &str, report: &ErrorReport) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReportRecord {
                channel,
                label: label.to_string(),
                report: report.clone(),
            });
    }
}

impl Reporter for RecordingReporter {
    fn error(&self, label: &str, report: &ErrorReport) {
        self.push(ReportChannel::Error, label, report);
    }

    fn warn(&self, label: &str, report: &ErrorReport) {
        self.push(ReportChannel::Warn, label, report);
    }
}

/// Terminator that records exit codes instead of exiting. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct RecordingTerminator {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> Vec<i32> {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(code);
    }
}
