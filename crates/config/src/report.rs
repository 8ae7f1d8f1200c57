//! Validation error reports.
//!
//! An `ErrorReport` maps each failing variable name to one message. It is
//! built in a single pass from the engine's violations and is never
//! partially constructed.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::engine::Violation;

/// Variable name → human-readable validation failure message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Build a report with one entry per violating field.
    ///
    /// When a field has several violations the last one wins.
    pub fn from_violations(violations: impl IntoIterator<Item = Violation>) -> Self {
        let mut errors = BTreeMap::new();
        for violation in violations {
            errors.insert(violation.field, violation.message);
        }
        Self { errors }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// JSON object form, as written after the channel label.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.errors).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            errors: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViolationKind;

    fn violation(field: &str, message: &str) -> Violation {
        Violation {
            field: field.to_string(),
            kind: ViolationKind::MissingVariable,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_report_json_shape() {
        let report = ErrorReport::from_violations([
            violation("REQUIRED_VAR_2", "Expected string"),
            violation("REQUIRED_VAR_1", "Expected string"),
        ]);
        assert_eq!(
            report.to_json(),
            r#"{"REQUIRED_VAR_1":"Expected string","REQUIRED_VAR_2":"Expected string"}"#
        );
    }

    #[test]
    fn test_last_violation_per_field_wins() {
        let report = ErrorReport::from_violations([
            violation("A", "first"),
            violation("A", "second"),
        ]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("A"), Some("second"));
    }
}
