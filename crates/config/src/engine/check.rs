//! Per-field validation and message selection.

use serde_json::Value;

use crate::schema::{Constraint, Field, FieldKind};

/// Category of a validation failure.
///
/// All categories surface the same way in an `ErrorReport`; only the
/// message text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field absent with no default.
    MissingVariable,
    /// Present value could not be coerced to the declared kind.
    TypeMismatch,
    /// Coerced value fails a declared constraint.
    ConstraintViolation,
}

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

pub(super) fn violation(name: &str, field: &Field, value: Option<&Value>) -> Option<Violation> {
    let (kind, generic) = match value {
        None if field.is_optional() => return None,
        None => (ViolationKind::MissingVariable, field.kind().type_message()),
        Some(value) if !field.kind().matches(value) => {
            (ViolationKind::TypeMismatch, field.kind().type_message())
        }
        Some(value) => (
            ViolationKind::ConstraintViolation,
            field
                .constraints()
                .iter()
                .filter_map(|c| constraint_failure(field.kind(), c, value).map(|m| (rank(c), m)))
                .max_by_key(|(rank, _)| *rank)
                .map(|(_, message)| message)?,
        ),
    };

    Some(Violation {
        field: name.to_string(),
        kind,
        message: field.message().map(str::to_string).unwrap_or(generic),
    })
}

/// Fixed evaluation order of constraint kinds. When several fail, the one
/// evaluated last supplies the message; ties go to the later declaration.
fn rank(constraint: &Constraint) -> u8 {
    match constraint {
        Constraint::MinLength(_) => 0,
        Constraint::MaxLength(_) => 1,
        Constraint::Pattern(_) => 2,
        Constraint::Minimum(_) => 3,
        Constraint::Maximum(_) => 4,
        Constraint::OneOf(_) => 5,
    }
}

fn constraint_failure(kind: FieldKind, constraint: &Constraint, value: &Value) -> Option<String> {
    match (constraint, value) {
        (Constraint::MinLength(min), Value::String(s)) if s.chars().count() < *min => Some(
            format!("Expected string length greater or equal to {}", min),
        ),
        (Constraint::MaxLength(max), Value::String(s)) if s.chars().count() > *max => {
            Some(format!("Expected string length less or equal to {}", max))
        }
        (Constraint::Pattern(regex), Value::String(s)) if !regex.is_match(s) => {
            Some(format!("Expected string to match '{}'", regex.as_str()))
        }
        (Constraint::Minimum(min), Value::Number(n)) if n.as_f64().is_some_and(|n| n < *min) => {
            Some(format!("Expected {} to be greater or equal to {}", kind, min))
        }
        (Constraint::Maximum(max), Value::Number(n)) if n.as_f64().is_some_and(|n| n > *max) => {
            Some(format!("Expected {} to be less or equal to {}", kind, max))
        }
        (Constraint::OneOf(allowed), value) if !allowed.contains(value) => {
            Some("Expected union value".to_string())
        }
        _ => None,
    }
}
