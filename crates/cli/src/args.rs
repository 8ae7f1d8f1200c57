//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map textual options onto library types (`OnError`).
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use envgate_config::OnError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envgate")]
#[command(about = "Validate environment variables against a schema", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envgate check --schema env.yaml\n  envgate check --schema env.json --prefix APP_ --env-file .env\n  envgate check --schema env.yaml --on-error warn --output pretty\n  envgate schema --schema env.yaml\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the environment and print the resulting configuration as JSON
    Check {
        /// Schema file (.json, .yaml or .yml)
        #[arg(short, long, env = "ENVGATE_SCHEMA", value_name = "FILE")]
        schema: PathBuf,

        /// Only read variables with this prefix (the prefix is stripped)
        #[arg(short, long, env = "ENVGATE_PREFIX")]
        prefix: Option<String>,

        /// What to do when validation fails
        #[arg(long, value_enum, default_value_t = OnErrorArg::Exit)]
        on_error: OnErrorArg,

        /// .env files layered over the process environment, later files win
        #[arg(long = "env-file", value_name = "FILE")]
        env_files: Vec<PathBuf>,

        /// Do not read the process environment (only --env-file sources)
        #[arg(long)]
        no_process_env: bool,

        /// Output format for the configuration
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Print a summary of the fields declared in a schema file
    Schema {
        /// Schema file (.json, .yaml or .yml)
        #[arg(short, long, env = "ENVGATE_SCHEMA", value_name = "FILE")]
        schema: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnErrorArg {
    Exit,
    Warn,
    Silent,
}

impl From<OnErrorArg> for OnError {
    fn from(arg: OnErrorArg) -> Self {
        match arg {
            OnErrorArg::Exit => OnError::Exit,
            OnErrorArg::Warn => OnError::Warn,
            OnErrorArg::Silent => OnError::Silent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}
