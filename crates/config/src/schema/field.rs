//! Field declarations: kinds, constraints, defaults, and messages.
//!
//! Responsibilities:
//! - Define the closed set of field kinds and the coercion function for each.
//! - Provide a chained builder for declaring a single field.
//!
//! Does NOT handle:
//! - Checking values against constraints (see `engine`).
//! - Reading field declarations from files (see `document.rs`).
//!
//! Invariants:
//! - Coercion never fails: values that cannot be converted are returned unchanged
//!   so the check step can report the type mismatch.
//! - String lengths are counted in characters, not bytes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Primitive type declared for an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    /// Lowercase type name as it appears in messages and schema documents.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }

    /// Generic message reported when a value is missing or has the wrong type.
    pub fn type_message(self) -> String {
        format!("Expected {}", self.name())
    }

    /// Convert `value` towards this kind.
    ///
    /// Raw environment values are always strings; defaults may be any JSON
    /// value. Inputs that do not convert cleanly come back untouched.
    pub fn coerce(self, value: &Value) -> Value {
        match self {
            FieldKind::String => match value {
                Value::Number(n) => Value::String(n.to_string()),
                Value::Bool(b) => Value::String(b.to_string()),
                other => other.clone(),
            },
            FieldKind::Number => match value {
                Value::Number(_) => value.clone(),
                _ => numeric(value)
                    .map(number_value)
                    .unwrap_or_else(|| value.clone()),
            },
            FieldKind::Integer => match numeric(value) {
                Some(n) => number_value(n),
                None => value.clone(),
            },
            FieldKind::Boolean => match value {
                Value::String(s) if s.eq_ignore_ascii_case("true") || s == "1" => Value::Bool(true),
                Value::String(s) if s.eq_ignore_ascii_case("false") || s == "0" => {
                    Value::Bool(false)
                }
                Value::Number(n) if n.as_f64() == Some(1.0) => Value::Bool(true),
                Value::Number(n) if n.as_f64() == Some(0.0) => Value::Bool(false),
                other => other.clone(),
            },
        }
    }

    /// Whether `value` already has this kind.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (FieldKind::String, Value::String(_)) => true,
            (FieldKind::Number, Value::Number(_)) => true,
            (FieldKind::Integer, Value::Number(n)) => {
                n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            (FieldKind::Boolean, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

// Whole values are stored as JSON integers so `"123"` compares equal to `123`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// A declared restriction on a coerced value.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Minimum string length in characters.
    MinLength(usize),
    /// Maximum string length in characters.
    MaxLength(usize),
    /// Inclusive lower bound for numbers and integers.
    Minimum(f64),
    /// Inclusive upper bound for numbers and integers.
    Maximum(f64),
    /// Regular expression the string must match somewhere.
    Pattern(Regex),
    /// The value must equal one of these.
    OneOf(Vec<Value>),
}

/// Declaration of a single expected environment variable.
#[derive(Debug, Clone)]
pub struct Field {
    kind: FieldKind,
    default: Option<Value>,
    optional: bool,
    constraints: Vec<Constraint>,
    message: Option<String>,
    description: Option<String>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            default: None,
            optional: false,
            constraints: Vec::new(),
            message: None,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    /// Value used when the variable is absent from the source.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Allow the variable to be absent without a default.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn min_length(self, len: usize) -> Self {
        self.constraint(Constraint::MinLength(len))
    }

    pub fn max_length(self, len: usize) -> Self {
        self.constraint(Constraint::MaxLength(len))
    }

    pub fn minimum(self, bound: f64) -> Self {
        self.constraint(Constraint::Minimum(bound))
    }

    pub fn maximum(self, bound: f64) -> Self {
        self.constraint(Constraint::Maximum(bound))
    }

    pub fn pattern(self, pattern: Regex) -> Self {
        self.constraint(Constraint::Pattern(pattern))
    }

    pub fn one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.constraint(Constraint::OneOf(values.into_iter().map(Into::into).collect()))
    }

    /// Append a constraint; constraints are checked in the order they are added.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Message reported for any failure of this field instead of the generic text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// True when absence of the variable is a validation failure.
    pub fn is_required(&self) -> bool {
        !self.optional && self.default.is_none()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
