//! Declarative schema for expected environment variables.
//!
//! Responsibilities:
//! - Hold the set of declared fields, keyed by variable name.
//! - Re-export field and document types.
//!
//! Does NOT handle:
//! - Applying the schema to a source (see `engine`).
//!
//! Invariants:
//! - A schema is immutable once handed to the loader.
//! - Fields iterate in variable-name order.

mod document;
mod field;

pub use document::SchemaDocument;
pub use field::{Constraint, Field, FieldKind};

use std::collections::BTreeMap;

/// Expected configuration fields, declared once by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: BTreeMap<String, Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing any earlier declaration with the same name.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.insert(name, field);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Field)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, Field)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, field) in iter {
            schema.insert(name, field);
        }
        schema
    }
}
