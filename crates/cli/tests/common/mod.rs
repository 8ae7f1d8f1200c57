//! Shared test utilities for envgate integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory with an empty process environment.
//! - Write schema and `.env` fixtures into a temporary directory.
//!
//! Invariants / Assumptions:
//! - Tests add every variable they need explicitly; nothing leaks in from the host.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `envgate` command.
///
/// The process environment is cleared so `ENVGATE_SCHEMA`, `ENVGATE_PREFIX`
/// and `DOTENV_DISABLED` from the host cannot change behavior.
pub fn envgate_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envgate");
    cmd.env_clear();
    cmd
}

/// Schema used by most tests: a required host and a port with a default.
pub const SERVER_SCHEMA: &str = r#"
HOST:
  type: string
  min_length: 1
PORT:
  type: integer
  default: 3000
  minimum: 1
  maximum: 65535
"#;

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
