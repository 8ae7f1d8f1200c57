//! Check command implementation.

use anyhow::{Context, Result};
use envgate_config::source::dotenv_disabled;
use envgate_config::{DotenvFile, EnvLoader, EnvOptions, LayeredSource, OnError, ProcessEnv};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::args::OutputFormat;

pub struct CheckArgs {
    pub schema: PathBuf,
    pub prefix: Option<String>,
    pub on_error: OnError,
    pub env_files: Vec<PathBuf>,
    pub no_process_env: bool,
    pub output: OutputFormat,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let schema = super::load_schema(&args.schema)?;
    info!(fields = schema.len(), schema = %args.schema.display(), "Loaded schema");

    let mut source = LayeredSource::new();
    if !args.no_process_env {
        source = source.with(ProcessEnv);
    }
    if dotenv_disabled() {
        debug!("DOTENV_DISABLED is set, skipping --env-file sources");
    } else {
        for path in &args.env_files {
            let file = DotenvFile::load(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            source = source.with(file);
        }
    }

    let mut options = EnvOptions::new()
        .env_source(source)
        .on_error(args.on_error);
    if let Some(prefix) = args.prefix {
        options = options.prefix(prefix);
    }

    let env = EnvLoader::load(&schema, options);

    let output = match args.output {
        OutputFormat::Json => serde_json::to_string(&env)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&env)?,
    };
    println!("{}", output);

    Ok(())
}
