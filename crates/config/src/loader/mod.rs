//! Environment loader: source selection through outcome dispatch.
//!
//! Responsibilities:
//! - Provide `EnvLoader::load`, the one-shot startup step that turns a source
//!   into a validated configuration.
//! - Provide `EnvOptions` for source, prefix, failure policy, and callbacks.
//! - Provide `Env`, the shared result handed to request handlers.
//!
//! Does NOT handle:
//! - Schema semantics (see `schema` and `engine`).
//! - Router integration (see `decoration`).
//!
//! Invariants / Assumptions:
//! - Loading is synchronous and runs before any request is served.
//! - `on_success` never fires on a failure path.

mod builder;
mod env;
mod options;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use env::Env;
pub use options::{EnvOptions, SuccessHandler};
