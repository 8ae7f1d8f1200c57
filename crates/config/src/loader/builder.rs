//! Environment loader implementation.
//!
//! Responsibilities:
//! - Run the fixed pipeline: resolve source → prefix filter → parse → check →
//!   outcome dispatch.
//! - Fire the success callback only for validated configurations.
//!
//! Does NOT handle:
//! - Report formatting or termination (delegated to the injected policy capabilities).
//! - Attaching the result to a router (see `decoration`).
//!
//! Invariants / Assumptions:
//! - Exactly one of ValidatedConfig / ErrorReport is produced per attempt.
//! - The source is read once; loading never awaits or retries.
//! - Log events carry variable names only, never values.

use super::env::Env;
use super::options::EnvOptions;
use crate::config::ValidatedConfig;
use crate::engine::{self, Candidate};
use crate::error::{EnvError, Result};
use crate::report::ErrorReport;
use crate::schema::Schema;
use crate::source::{EnvSource, strip_prefix};

/// Loads and validates environment variables against a schema.
pub struct EnvLoader;

enum Attempt {
    Valid(ValidatedConfig),
    Invalid(Candidate, ErrorReport),
}

impl EnvLoader {
    /// Load the environment, dispatching failures to `options.on_error`.
    ///
    /// Under `OnError::Exit` with the default terminator the process ends on
    /// failure. Under any other policy the returned `Env` holds the
    /// unvalidated candidate; check [`Env::is_validated`] before trusting it.
    pub fn load(schema: &Schema, options: EnvOptions) -> Env {
        let EnvOptions {
            source,
            prefix,
            on_error,
            on_success,
            reporter,
            terminator,
        } = options;

        match Self::attempt(schema, source.as_ref(), prefix.as_deref()) {
            Attempt::Valid(config) => {
                if let Some(handler) = on_success {
                    handler(&config);
                }
                Env::validated(config)
            }
            Attempt::Invalid(candidate, report) => {
                on_error.dispatch(&report, reporter.as_ref(), terminator.as_ref());
                tracing::debug!(
                    policy = ?on_error,
                    "Continuing with unvalidated environment"
                );
                Env::unvalidated(ValidatedConfig::new(candidate), report)
            }
        }
    }

    /// Load the environment, returning failures instead of dispatching them.
    ///
    /// The failure policy, reporter, and terminator in `options` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Validation` carrying the full report when any field fails.
    pub fn try_load(schema: &Schema, options: EnvOptions) -> Result<Env> {
        let EnvOptions {
            source,
            prefix,
            on_success,
            ..
        } = options;

        match Self::attempt(schema, source.as_ref(), prefix.as_deref()) {
            Attempt::Valid(config) => {
                if let Some(handler) = on_success {
                    handler(&config);
                }
                Ok(Env::validated(config))
            }
            Attempt::Invalid(_, report) => Err(EnvError::Validation(report)),
        }
    }

    fn attempt(schema: &Schema, source: &dyn EnvSource, prefix: Option<&str>) -> Attempt {
        let mut env = source.snapshot();
        tracing::debug!(count = env.len(), "Resolved environment source");

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            env = strip_prefix(env, prefix);
            tracing::debug!(prefix, count = env.len(), "Filtered environment by prefix");
        }

        let candidate = engine::parse(schema, &env);

        if engine::check(schema, &candidate) {
            tracing::info!(fields = candidate.len(), "Environment validated");
            Attempt::Valid(ValidatedConfig::new(candidate))
        } else {
            let report = ErrorReport::from_violations(engine::errors(schema, &candidate));
            tracing::debug!(
                invalid = report.len(),
                fields = ?report.fields().collect::<Vec<_>>(),
                "Environment validation failed"
            );
            Attempt::Invalid(candidate, report)
        }
    }
}
