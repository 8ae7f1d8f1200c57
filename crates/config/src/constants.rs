//! Centralized constants for the envgate workspace.
//!
//! This module contains the fixed report labels and exit codes shared by
//! the library and the CLI so their output stays byte-identical.

// =============================================================================
// Failure Reporting
// =============================================================================

/// Label written before the error report on the error channel.
pub const ERROR_LABEL: &str = "❌ Invalid environment variables:";

/// Label written before the error report on the warning channel.
pub const WARN_LABEL: &str = "⚠️ Invalid environment variables:";

/// Process exit status used by the `exit` failure policy.
pub const INVALID_ENV_EXIT_CODE: i32 = 1;

// =============================================================================
// Dotenv
// =============================================================================

/// Environment variable that disables `.env` file loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
