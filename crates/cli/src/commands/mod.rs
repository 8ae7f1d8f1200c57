//! CLI command implementations.

pub mod check;
pub mod schema;

use anyhow::{Context, Result};
use envgate_config::{Schema, SchemaDocument};
use std::path::Path;

pub fn load_schema(path: &Path) -> Result<Schema> {
    SchemaDocument::from_path(path)
        .and_then(SchemaDocument::into_schema)
        .with_context(|| format!("Failed to load schema {}", path.display()))
}
