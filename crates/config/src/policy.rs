//! Failure policy: what happens when validation fails.
//!
//! Responsibilities:
//! - Select between terminating, warning, staying silent, or a custom handler.
//! - Abstract the report channels (`Reporter`) and process termination
//!   (`Terminator`) so neither is hard-wired into the loader.
//!
//! Does NOT handle:
//! - Producing the `ErrorReport` (see `engine`).
//!
//! Invariants:
//! - `Silent` never touches a reporter or terminator.
//! - `Custom` runs exactly once and replaces all built-in reporting.
//! - `Exit` reports on the error channel before terminating with status 1.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ERROR_LABEL, INVALID_ENV_EXIT_CODE, WARN_LABEL};
use crate::report::ErrorReport;

/// Handler invoked with the full report instead of any built-in reporting.
pub type ErrorHandler = Box<dyn Fn(&ErrorReport) + Send + Sync>;

/// Behavior on validation failure.
#[derive(Default)]
pub enum OnError {
    /// Report on the error channel and terminate the process with status 1.
    #[default]
    Exit,
    /// Report on the warning channel and continue.
    Warn,
    /// Continue without reporting.
    Silent,
    /// Hand the report to a caller-supplied function.
    Custom(ErrorHandler),
}

impl OnError {
    pub fn custom(handler: impl Fn(&ErrorReport) + Send + Sync + 'static) -> Self {
        OnError::Custom(Box::new(handler))
    }

    /// Whether this policy ends the process.
    pub fn terminates(&self) -> bool {
        matches!(self, OnError::Exit)
    }

    /// Run the policy for one failed validation attempt.
    pub fn dispatch(
        &self,
        report: &ErrorReport,
        reporter: &dyn Reporter,
        terminator: &dyn Terminator,
    ) {
        match self {
            OnError::Custom(handler) => handler(report),
            OnError::Silent => {}
            OnError::Warn => reporter.warn(WARN_LABEL, report),
            OnError::Exit => {
                reporter.error(ERROR_LABEL, report);
                terminator.terminate(INVALID_ENV_EXIT_CODE);
            }
        }
    }
}

impl fmt::Debug for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnError::Exit => f.write_str("Exit"),
            OnError::Warn => f.write_str("Warn"),
            OnError::Silent => f.write_str("Silent"),
            OnError::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Error returned when parsing an unknown failure policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown on-error policy '{0}' (expected exit, warn or silent)")]
pub struct UnknownPolicy(pub String);

impl FromStr for OnError {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exit" => Ok(OnError::Exit),
            "warn" => Ok(OnError::Warn),
            "silent" => Ok(OnError::Silent),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Output channels for failure reports.
pub trait Reporter: Send + Sync {
    fn error(&self, label: &str, report: &ErrorReport);
    fn warn(&self, label: &str, report: &ErrorReport);
}

/// Writes `<label> <report JSON>` to standard error.
///
/// Both channels bypass `tracing`: the report is the user-facing result of a
/// failed load and must appear even when no subscriber is installed or the
/// log filter hides warnings. Diagnostics about the load itself go through
/// `tracing` in the loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn error(&self, label: &str, report: &ErrorReport) {
        eprintln!("{} {}", label, report);
    }

    fn warn(&self, label: &str, report: &ErrorReport) {
        eprintln!("{} {}", label, report);
    }
}

/// Capability to end the process.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Terminates via `std::process::exit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        tracing::error!(code, "Terminating after invalid environment");
        std::process::exit(code);
    }
}
