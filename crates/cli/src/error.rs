//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deployment scripts can branch on.
//! - Map library errors to exit codes.
//!
//! Does NOT handle:
//! - Exiting on invalid environments under `--on-error exit`; the library's
//!   failure policy terminates with status 1 itself.
//!
//! Invariants:
//! - Exit code 1 always means the environment failed validation.

use envgate_config::EnvError;

/// Structured exit codes for envgate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the environment is valid (or failures were downgraded).
    #[allow(dead_code)]
    Success = 0,

    /// Invalid environment - one or more variables failed validation.
    InvalidEnvironment = 1,

    /// General error - unhandled or generic failure.
    GeneralError = 2,

    /// Schema error - the schema file is missing, unreadable, or malformed.
    ///
    /// Scripts should fix the schema, not the environment.
    SchemaError = 3,

    /// Source error - a `.env` file is missing or malformed.
    SourceError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Pick the exit code for an error returned by a command.
    pub fn for_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<EnvError>())
            .map(Self::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        match err {
            EnvError::Validation(_) => ExitCode::InvalidEnvironment,
            EnvError::InvalidSchema { .. }
            | EnvError::SchemaRead { .. }
            | EnvError::SchemaParse { .. }
            | EnvError::UnsupportedSchemaFormat(_) => ExitCode::SchemaError,
            EnvError::DotenvParse { .. } | EnvError::DotenvIo { .. } | EnvError::DotenvUnknown => {
                ExitCode::SourceError
            }
            _ => ExitCode::GeneralError,
        }
    }
}
