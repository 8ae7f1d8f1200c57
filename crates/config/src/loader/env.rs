//! The loaded environment exposed to handlers.

use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

use crate::config::ValidatedConfig;
use crate::report::ErrorReport;

/// Result of one load, shared read-only across handlers.
///
/// Either validated, or (under a non-terminating failure policy) the
/// unvalidated candidate together with the report explaining why.
#[derive(Debug, Clone)]
pub struct Env {
    inner: Arc<EnvInner>,
}

#[derive(Debug)]
struct EnvInner {
    config: ValidatedConfig,
    report: Option<ErrorReport>,
}

impl Env {
    pub(crate) fn validated(config: ValidatedConfig) -> Self {
        Self {
            inner: Arc::new(EnvInner {
                config,
                report: None,
            }),
        }
    }

    pub(crate) fn unvalidated(candidate: ValidatedConfig, report: ErrorReport) -> Self {
        Self {
            inner: Arc::new(EnvInner {
                config: candidate,
                report: Some(report),
            }),
        }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.inner.config
    }

    /// False when validation failed and the config is a best-effort candidate.
    pub fn is_validated(&self) -> bool {
        self.inner.report.is_none()
    }

    pub fn error_report(&self) -> Option<&ErrorReport> {
        self.inner.report.as_ref()
    }
}

impl Deref for Env {
    type Target = ValidatedConfig;

    fn deref(&self) -> &Self::Target {
        self.config()
    }
}

impl Serialize for Env {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.config.serialize(serializer)
    }
}
