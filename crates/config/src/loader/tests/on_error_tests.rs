//! Failure policy tests for the loader.
//!
//! Responsibilities:
//! - Test each `OnError` mode end to end.
//! - Test that non-terminating modes still expose the flagged candidate.

use serde_json::json;
use std::sync::{Arc, Mutex};

use super::recorded_options;
use crate::constants::{ERROR_LABEL, WARN_LABEL};
use crate::loader::EnvLoader;
use crate::policy::OnError;
use crate::report::ErrorReport;
use crate::schema::{Field, Schema};
use crate::testing::ReportChannel;

fn required() -> Schema {
    Schema::new().field("REQUIRED_VAR", Field::string())
}

#[test]
fn test_default_policy_is_exit() {
    let (options, reporter, terminator) = recorded_options(&[]);

    EnvLoader::load(&required(), options);

    assert_eq!(terminator.codes(), vec![1]);
    let records = reporter.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].channel, ReportChannel::Error);
    assert_eq!(records[0].label, ERROR_LABEL);
    assert_eq!(records[0].report.get("REQUIRED_VAR"), Some("Expected string"));
}

#[test]
fn test_explicit_exit() {
    let (options, reporter, terminator) = recorded_options(&[]);

    EnvLoader::load(&required(), options.on_error(OnError::Exit));

    assert_eq!(terminator.codes(), vec![1]);
    assert_eq!(reporter.records()[0].channel, ReportChannel::Error);
}

#[test]
fn test_warn_reports_and_continues() {
    let (options, reporter, terminator) = recorded_options(&[]);

    let env = EnvLoader::load(&required(), options.on_error(OnError::Warn));

    assert!(terminator.codes().is_empty());
    let records = reporter.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].channel, ReportChannel::Warn);
    assert_eq!(records[0].label, WARN_LABEL);
    assert!(!env.is_validated());
}

#[test]
fn test_warn_with_multiple_errors() {
    let schema = Schema::new()
        .field("REQUIRED_VAR_1", Field::string())
        .field("REQUIRED_VAR_2", Field::string());
    let (options, reporter, _) = recorded_options(&[]);

    EnvLoader::load(&schema, options.on_error(OnError::Warn));

    let expected: ErrorReport = [
        ("REQUIRED_VAR_1", "Expected string"),
        ("REQUIRED_VAR_2", "Expected string"),
    ]
    .into_iter()
    .collect();
    assert_eq!(reporter.records()[0].report, expected);
}

#[test]
fn test_silent_suppresses_everything() {
    let schema = Schema::new()
        .field("A", Field::string())
        .field("B", Field::number())
        .field("C", Field::boolean());
    let (options, reporter, terminator) = recorded_options(&[("B", "x"), ("C", "maybe")]);

    let env = EnvLoader::load(&schema, options.on_error(OnError::Silent));

    assert!(reporter.records().is_empty());
    assert!(terminator.codes().is_empty());
    assert_eq!(env.error_report().map(ErrorReport::len), Some(3));
}

#[test]
fn test_custom_handler_called_once_with_full_report() {
    let calls: Arc<Mutex<Vec<ErrorReport>>> = Arc::default();
    let seen = Arc::clone(&calls);
    let (options, reporter, terminator) = recorded_options(&[]);

    EnvLoader::load(
        &required(),
        options.on_error(OnError::custom(move |report| {
            seen.lock().unwrap().push(report.clone());
        })),
    );

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("REQUIRED_VAR"), Some("Expected string"));
    assert!(reporter.records().is_empty());
    assert!(terminator.codes().is_empty());
}

#[test]
fn test_failure_exposes_flagged_candidate() {
    let schema = Schema::new()
        .field("PORT", Field::number())
        .field("HOST", Field::string().with_default("localhost"))
        .field("TOKEN", Field::string());
    let (options, _, _) = recorded_options(&[("PORT", "not-a-number")]);

    let env = EnvLoader::load(&schema, options.on_error(OnError::Silent));

    assert!(!env.is_validated());
    assert_eq!(
        env.config().to_value(),
        json!({"PORT": "not-a-number", "HOST": "localhost"})
    );
    let report = env.error_report().unwrap();
    assert_eq!(report.get("PORT"), Some("Expected number"));
    assert_eq!(report.get("TOKEN"), Some("Expected string"));
    assert_eq!(report.get("HOST"), None);
}

#[test]
fn test_success_carries_no_report() {
    let (options, _, _) = recorded_options(&[("REQUIRED_VAR", "here")]);

    let env = EnvLoader::load(&required(), options.on_error(OnError::Warn));

    assert!(env.is_validated());
    assert!(env.error_report().is_none());
}
