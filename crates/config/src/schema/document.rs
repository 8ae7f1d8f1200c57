//! Schema documents read from JSON or YAML.
//!
//! Responsibilities:
//! - Deserialize a mapping of variable name → field declaration.
//! - Accept a bare type name (`PORT: number`) as shorthand for a field with no options.
//! - Compile patterns and convert declarations into a `Schema`.
//!
//! Does NOT handle:
//! - Validating that defaults match the declared kind (the embedding
//!   application owns schema correctness).
//!
//! Invariants:
//! - Unknown keys inside a field declaration are rejected.
//! - File format is chosen by extension only.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::{Field, FieldKind, Schema};
use crate::error::{EnvError, Result};

/// A schema as written in a JSON or YAML file.
///
/// ```yaml
/// TOKEN:
///   type: string
///   min_length: 5
///   error: TOKEN is required for service A!
/// IS_ENABLED:
///   type: boolean
///   default: false
/// PORT: number
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocument {
    fields: BTreeMap<String, FieldEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FieldEntry {
    Kind(FieldKind),
    Spec(FieldSpec),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldSpec {
    #[serde(rename = "type")]
    kind: FieldKind,
    default: Option<Value>,
    #[serde(default)]
    optional: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    pattern: Option<String>,
    #[serde(rename = "enum")]
    one_of: Option<Vec<Value>>,
    error: Option<String>,
    description: Option<String>,
}

impl SchemaDocument {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| EnvError::SchemaParse {
            origin: "JSON input".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).map_err(|e| EnvError::SchemaParse {
            origin: "YAML input".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a schema file, picking the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(EnvError::UnsupportedSchemaFormat(path.to_path_buf())),
        };

        let raw = std::fs::read_to_string(path).map_err(|_| EnvError::SchemaRead {
            path: path.to_path_buf(),
        })?;

        parse(&raw).map_err(|e| match e {
            EnvError::SchemaParse { message, .. } => EnvError::SchemaParse {
                origin: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn into_schema(self) -> Result<Schema> {
        let mut schema = Schema::new();
        for (name, entry) in self.fields {
            let field = match entry {
                FieldEntry::Kind(kind) => Field::new(kind),
                FieldEntry::Spec(spec) => spec.into_field(&name)?,
            };
            schema.insert(name, field);
        }
        Ok(schema)
    }
}

impl FieldSpec {
    fn into_field(self, name: &str) -> Result<Field> {
        let mut field = Field::new(self.kind);

        if let Some(default) = self.default {
            field = field.with_default(default);
        }
        if self.optional {
            field = field.optional();
        }
        if let Some(len) = self.min_length {
            field = field.min_length(len);
        }
        if let Some(len) = self.max_length {
            field = field.max_length(len);
        }
        if let (Some(min), Some(max)) = (self.minimum, self.maximum)
            && min > max
        {
            return Err(EnvError::invalid_schema(
                name,
                format!("minimum {} is greater than maximum {}", min, max),
            ));
        }
        if let Some(min) = self.minimum {
            field = field.minimum(min);
        }
        if let Some(max) = self.maximum {
            field = field.maximum(max);
        }
        if let Some(pattern) = self.pattern {
            let regex = Regex::new(&pattern)
                .map_err(|e| EnvError::invalid_schema(name, format!("invalid pattern: {}", e)))?;
            field = field.pattern(regex);
        }
        if let Some(values) = self.one_of {
            if values.is_empty() {
                return Err(EnvError::invalid_schema(name, "enum must not be empty"));
            }
            field = field.one_of(values);
        }
        if let Some(message) = self.error {
            field = field.with_message(message);
        }
        if let Some(description) = self.description {
            field = field.with_description(description);
        }

        Ok(field)
    }
}
