//! `signa` - text-to-sign animation from the command line

mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use signa_core::SignaError;
use signa_runtime::telemetry::{self, LogOptions, Verbosity};
use signa_runtime::{OutputFormat, PipelineConfig, SignPipeline, Translation};
use thiserror::Error;

use crate::cli::{Args, Command};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] SignaError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("failed to encode vocabulary: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let options = LogOptions {
        verbosity: Verbosity::from_flags(args.verbose, args.quiet),
        json: args.json_logs,
    };
    if let Err(e) = telemetry::init(options) {
        eprintln!("warning: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "signa failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = SignPipeline::from_config(config)?;

    match args.command {
        Command::Text(cmd) => {
            let translation = pipeline.text_to_animation(&cmd.text(), cmd.duration)?;
            emit(&translation, cmd.format, cmd.compact, cmd.output.as_deref())
        }
        Command::Gloss(cmd) => {
            let translation = pipeline.gloss_to_animation(cmd.glosses.as_slice(), cmd.duration)?;
            emit(&translation, cmd.format, cmd.compact, cmd.output.as_deref())
        }
        Command::Vocabulary(_) => {
            let json = serde_json::to_string_pretty(pipeline.vocabulary().as_map())?;
            write_output(&json, None)
        }
    }
}

fn emit(
    translation: &Translation,
    format: OutputFormat,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let json = translation.to_json(format, !compact)?;
    write_output(&json, output)
}

fn write_output(json: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = json.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(CliError::Stdout)
        }
    }
}
