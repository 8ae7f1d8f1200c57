//! Schema engine: turns a raw environment into a candidate value and checks it.
//!
//! Responsibilities:
//! - Build the candidate: drop undeclared keys, apply defaults, coerce types.
//! - Check a candidate against the schema.
//! - Enumerate every failing field with a message.
//!
//! Does NOT handle:
//! - Reading sources or prefix filtering (see `source`).
//! - Deciding what happens on failure (see `policy`).
//!
//! Invariants:
//! - The candidate only ever contains keys declared in the schema.
//! - `check` is true exactly when `errors` is empty.

mod check;

pub use check::{Violation, ViolationKind};

use serde_json::{Map, Value};

use crate::schema::Schema;
use crate::source::RawEnvironment;

/// Cleaned, defaulted, converted value awaiting validation.
pub type Candidate = Map<String, Value>;

/// Produce the candidate value for `env` under `schema`.
///
/// Present variables are coerced to their field's kind. Absent variables
/// take the field default (also coerced) or are left out.
pub fn parse(schema: &Schema, env: &RawEnvironment) -> Candidate {
    let mut candidate = Candidate::new();
    for (name, field) in schema.fields() {
        let raw = match env.get(name) {
            Some(value) => Value::String(value.clone()),
            None => match field.default_value() {
                Some(default) => default.clone(),
                None => continue,
            },
        };
        candidate.insert(name.to_string(), field.kind().coerce(&raw));
    }
    candidate
}

/// True when every declared field of `candidate` is valid.
pub fn check(schema: &Schema, candidate: &Candidate) -> bool {
    schema
        .fields()
        .all(|(name, field)| check::violation(name, field, candidate.get(name)).is_none())
}

/// Every failing field, in variable-name order.
pub fn errors(schema: &Schema, candidate: &Candidate) -> Vec<Violation> {
    schema
        .fields()
        .filter_map(|(name, field)| check::violation(name, field, candidate.get(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> RawEnvironment {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_strips_undeclared_keys() {
        let schema = Schema::new().field("A", Field::string());
        let candidate = parse(&schema, &env(&[("A", "1"), ("B", "2")]));
        assert_eq!(Value::Object(candidate), json!({"A": "1"}));
    }

    #[test]
    fn test_parse_applies_defaults_and_coerces_them() {
        let schema = Schema::new()
            .field("PORT", Field::number().with_default("3000"))
            .field("DEBUG", Field::boolean().with_default(false))
            .field("NAME", Field::string().optional());
        let candidate = parse(&schema, &env(&[]));
        assert_eq!(
            Value::Object(candidate),
            json!({"PORT": 3000, "DEBUG": false})
        );
    }

    #[test]
    fn test_present_value_overrides_default() {
        let schema = Schema::new().field("PORT", Field::integer().with_default(3000));
        let candidate = parse(&schema, &env(&[("PORT", "8080")]));
        assert_eq!(candidate["PORT"], json!(8080));
    }

    #[test]
    fn test_check_agrees_with_errors() {
        let schema = Schema::new()
            .field("A", Field::string())
            .field("B", Field::number());

        let good = parse(&schema, &env(&[("A", "x"), ("B", "1")]));
        assert!(check(&schema, &good));
        assert!(errors(&schema, &good).is_empty());

        let bad = parse(&schema, &env(&[("B", "nope")]));
        assert!(!check(&schema, &bad));
        let violations = errors(&schema, &bad);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "A");
        assert_eq!(violations[0].kind, ViolationKind::MissingVariable);
        assert_eq!(violations[1].field, "B");
        assert_eq!(violations[1].kind, ViolationKind::TypeMismatch);
        assert_eq!(violations[1].message, "Expected number");
    }
}
