//! Error types for schema construction, source loading, and strict validation.
//!
//! Responsibilities:
//! - Define error variants for every fallible operation in the crate.
//! - Carry the full `ErrorReport` when strict loading refuses a candidate.
//!
//! Does NOT handle:
//! - Reporting validation failures to an output channel (see `policy`).
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Schema errors always name the offending field.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::report::ErrorReport;

/// Errors produced by envgate.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Invalid schema for field {field}: {message}")]
    InvalidSchema { field: String, message: String },

    #[error("Failed to read schema file at {path}")]
    SchemaRead { path: PathBuf },

    #[error("Failed to parse schema from {origin}: {message}")]
    SchemaParse { origin: String, message: String },

    #[error("Unsupported schema file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedSchemaFormat(PathBuf),

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("Invalid environment variables: {0}")]
    Validation(ErrorReport),

    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl EnvError {
    pub(crate) fn invalid_schema(field: &str, message: impl Into<String>) -> Self {
        EnvError::InvalidSchema {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<dotenvy::Error> for EnvError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => EnvError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => EnvError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => EnvError::DotenvUnknown,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
