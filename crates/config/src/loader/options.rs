//! Loader options.
//!
//! Responsibilities:
//! - Collect the source, prefix, failure policy, success callback, and the
//!   injected report/termination capabilities for one load.
//!
//! Invariants:
//! - Defaults: live process environment, no prefix, `OnError::Exit`,
//!   `ConsoleReporter`, `ProcessExit`.

use std::fmt;

use crate::config::ValidatedConfig;
use crate::policy::{ConsoleReporter, OnError, ProcessExit, Reporter, Terminator};
use crate::source::{EnvSource, ProcessEnv};

/// Callback invoked with the validated configuration.
pub type SuccessHandler = Box<dyn FnOnce(&ValidatedConfig) + Send>;

/// Options for [`EnvLoader::load`](super::EnvLoader::load).
pub struct EnvOptions {
    pub(super) source: Box<dyn EnvSource + Send + Sync>,
    pub(super) prefix: Option<String>,
    pub(super) on_error: OnError,
    pub(super) on_success: Option<SuccessHandler>,
    pub(super) reporter: Box<dyn Reporter>,
    pub(super) terminator: Box<dyn Terminator>,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvOptions {
    pub fn new() -> Self {
        Self {
            source: Box::new(ProcessEnv),
            prefix: None,
            on_error: OnError::default(),
            on_success: None,
            reporter: Box::new(ConsoleReporter),
            terminator: Box::new(ProcessExit),
        }
    }

    /// Read from `source` instead of the process environment.
    pub fn env_source(mut self, source: impl EnvSource + Send + Sync + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Only load variables starting with `prefix`, with the prefix removed.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Callback run only when validation succeeds.
    pub fn on_success(mut self, handler: impl FnOnce(&ValidatedConfig) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(handler));
        self
    }

    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }
}

impl fmt::Debug for EnvOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvOptions")
            .field("prefix", &self.prefix)
            .field("on_error", &self.on_error)
            .field("on_success", &self.on_success.is_some())
            .finish_non_exhaustive()
    }
}
