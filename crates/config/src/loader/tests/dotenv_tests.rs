//! `.env` file source tests for the loader.
//!
//! Responsibilities:
//! - Test loading from a `.env` file as the only source.
//! - Test layering a `.env` file over the process environment.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::{env_lock, source, with_recorders};
use crate::loader::{EnvLoader, EnvOptions};
use crate::schema::{Field, Schema};
use crate::source::{DotenvFile, LayeredSource, ProcessEnv};

fn write_dotenv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_dotenv_file_as_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dotenv(&temp_dir, "APP_PORT=8080\nAPP_DEBUG=true\n");

    let schema = Schema::new()
        .field("PORT", Field::integer())
        .field("DEBUG", Field::boolean());
    let (options, _reporter, terminator) = with_recorders(
        EnvOptions::new()
            .env_source(DotenvFile::load(&path).unwrap())
            .prefix("APP_"),
    );
    let env = EnvLoader::load(&schema, options);

    assert!(env.is_validated());
    assert!(terminator.codes().is_empty());
    assert_eq!(env.get_i64("PORT"), Some(8080));
    assert_eq!(env.get_bool("DEBUG"), Some(true));
}

#[test]
#[serial]
fn test_dotenv_layered_over_process_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_dotenv(&temp_dir, "_ENVGATE_LAYER_B=from-file\n");

    temp_env::with_vars(
        [
            ("_ENVGATE_LAYER_A", Some("from-process")),
            ("_ENVGATE_LAYER_B", Some("from-process")),
        ],
        || {
            let schema = Schema::new()
                .field("_ENVGATE_LAYER_A", Field::string())
                .field("_ENVGATE_LAYER_B", Field::string())
                .field("_ENVGATE_LAYER_C", Field::string());
            let layered = LayeredSource::new()
                .with(ProcessEnv)
                .with(DotenvFile::load(&path).unwrap())
                .with(source(&[("_ENVGATE_LAYER_C", "override")]));

            let (options, _reporter, terminator) =
                with_recorders(EnvOptions::new().env_source(layered));
            let env = EnvLoader::load(&schema, options);

            assert!(terminator.codes().is_empty());
            assert_eq!(env.get_str("_ENVGATE_LAYER_A"), Some("from-process"));
            assert_eq!(env.get_str("_ENVGATE_LAYER_B"), Some("from-file"));
            assert_eq!(env.get_str("_ENVGATE_LAYER_C"), Some("override"));
        },
    );
}
