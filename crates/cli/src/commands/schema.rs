//! Schema command implementation.

use anyhow::Result;
use envgate_config::{Constraint, Field};
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let schema = super::load_schema(path)?;
    let width = schema.fields().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, field) in schema.fields() {
        println!("{:<width$}  {}", name, describe(field), width = width);
    }
    Ok(())
}

fn describe(field: &Field) -> String {
    let mut parts = vec![field.kind().to_string()];

    match field.default_value() {
        Some(default) => parts.push(format!("default={}", default)),
        None if field.is_optional() => parts.push("optional".to_string()),
        None => parts.push("required".to_string()),
    }

    for constraint in field.constraints() {
        parts.push(match constraint {
            Constraint::MinLength(n) => format!("min_length={}", n),
            Constraint::MaxLength(n) => format!("max_length={}", n),
            Constraint::Minimum(n) => format!("minimum={}", n),
            Constraint::Maximum(n) => format!("maximum={}", n),
            Constraint::Pattern(re) => format!("pattern={}", re.as_str()),
            Constraint::OneOf(values) => format!(
                "enum=[{}]",
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            ),
        });
    }

    if let Some(description) = field.description() {
        parts.push(format!("# {}", description));
    }

    parts.join("  ")
}
