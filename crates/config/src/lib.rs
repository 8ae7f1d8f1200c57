//! Schema-validated environment configuration for axum services.
//!
//! This crate reads variables from a key-value source (the process
//! environment by default), applies a declared schema (defaults, type
//! coercion, constraints), and exposes the typed result to request handlers.
//!
//! ```ignore
//! use envgate_config::{EnvLoader, EnvOptions, EnvRouterExt, Field, Schema};
//!
//! let schema = Schema::new()
//!     .field("TOKEN", Field::string().min_length(5))
//!     .field("PORT", Field::integer().with_default(3000));
//! let env = EnvLoader::load(&schema, EnvOptions::new().prefix("APP_"));
//! let app = axum::Router::new().with_env(env);
//! ```

pub mod constants;
mod config;
mod decoration;
pub mod engine;
mod error;
mod loader;
pub mod policy;
mod report;
pub mod schema;
pub mod source;
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use config::ValidatedConfig;
pub use decoration::{EnvRejection, EnvRouterExt};
pub use error::{EnvError, Result};
pub use loader::{Env, EnvLoader, EnvOptions, SuccessHandler};
pub use policy::{ConsoleReporter, OnError, ProcessExit, Reporter, Terminator};
pub use report::ErrorReport;
pub use schema::{Constraint, Field, FieldKind, Schema, SchemaDocument};
pub use source::{DotenvFile, EnvSource, LayeredSource, ProcessEnv, RawEnvironment};
