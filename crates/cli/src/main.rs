//! envgate - validate environment variables against a schema.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the tracing subscriber (stderr only, filtered by `RUST_LOG`).
//! - Run the selected command and translate failures into exit codes.
//!
//! Does NOT handle:
//! - Schema semantics or validation (see `crates/config`).
//!
//! Invariants:
//! - Configuration output goes to stdout; logs and reports go to stderr.
//! - An invalid environment under `--on-error exit` terminates with status 1.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use commands::check::CheckArgs;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check {
            schema,
            prefix,
            on_error,
            env_files,
            no_process_env,
            output,
        } => commands::check::run(CheckArgs {
            schema,
            prefix,
            on_error: on_error.into(),
            env_files,
            no_process_env,
            output,
        }),
        Commands::Schema { schema } => commands::schema::run(&schema),
    }
}
