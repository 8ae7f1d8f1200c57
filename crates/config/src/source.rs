//! Key-value sources that environment variables are read from.
//!
//! Responsibilities:
//! - Define the `EnvSource` capability the loader depends on.
//! - Provide the live process environment, in-memory maps, `.env` files, and
//!   layered combinations as sources.
//! - Filter and rename keys by prefix.
//!
//! Does NOT handle:
//! - Fetching from remote secret stores. Callers resolve those first and pass
//!   the resulting map in.
//!
//! Invariants:
//! - Sources are snapshots: reading never mutates the process environment.
//! - Prefix matching is exact and case-sensitive.
//! - Dotenv errors never echo file contents.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::{EnvError, Result};

/// Variable name → raw string value.
pub type RawEnvironment = HashMap<String, String>;

/// Anything environment variables can be read from.
pub trait EnvSource {
    fn snapshot(&self) -> RawEnvironment;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn snapshot(&self) -> RawEnvironment {
        let mut env = RawEnvironment::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    env.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    tracing::debug!(var = %key, "Skipping environment variable with non-UTF-8 value");
                }
                _ => tracing::debug!("Skipping environment variable with non-UTF-8 name"),
            }
        }
        env
    }
}

impl EnvSource for HashMap<String, String> {
    fn snapshot(&self) -> RawEnvironment {
        self.clone()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn snapshot(&self) -> RawEnvironment {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn snapshot(&self) -> RawEnvironment {
        (**self).snapshot()
    }
}

/// Variables parsed from a `.env` file, read once at construction.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    vars: RawEnvironment,
}

impl DotenvFile {
    /// Parse a `.env` file without touching the process environment.
    ///
    /// # Errors
    ///
    /// - `EnvError::DotenvParse` if the file has invalid syntax.
    /// - `EnvError::DotenvIo` if the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut vars = RawEnvironment::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        tracing::debug!(path = %path.as_ref().display(), count = vars.len(), "Loaded .env file");
        Ok(Self { vars })
    }

    /// Like [`DotenvFile::load`], but a missing file yields an empty source.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Err(EnvError::DotenvIo { kind }) if kind == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for DotenvFile {
    fn snapshot(&self) -> RawEnvironment {
        self.vars.clone()
    }
}

/// Several sources merged in order; later layers override earlier ones.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn EnvSource + Send + Sync>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl EnvSource + Send + Sync + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl EnvSource for LayeredSource {
    fn snapshot(&self) -> RawEnvironment {
        let mut merged = RawEnvironment::new();
        for layer in &self.layers {
            merged.extend(layer.snapshot());
        }
        merged
    }
}

/// Keep only keys starting with `prefix` and strip it from each survivor.
///
/// An empty prefix returns the source unchanged.
pub fn strip_prefix(env: RawEnvironment, prefix: &str) -> RawEnvironment {
    if prefix.is_empty() {
        return env;
    }
    env.into_iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|stripped| (stripped.to_string(), value))
        })
        .collect()
}

/// Check if `.env` loading is disabled via `DOTENV_DISABLED`.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}
