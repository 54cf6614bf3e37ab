//! Command-line interface for scoring beach conditions.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod score;
mod visit;

pub use error::CliError;
use score::{ScoreArgs, run_score};
use visit::{VisitArgs, run_visit};

const ARG_SCORE_FORECAST: &str = "forecast";
const ARG_SCORE_MARINE: &str = "marine";
const ARG_SCORE_DAYS: &str = "days";
const ENV_SCORE_FORECAST: &str = "BEACH_CMDS_SCORE_FORECAST";
const ARG_VISIT_ID: &str = "id";
const ARG_VISIT_NAME: &str = "name";
const ARG_VISIT_LOCATION: &str = "location";
const ARG_VISIT_PREVIEW: &str = "preview";
const ARG_VISIT_HISTORY: &str = "history";
const ARG_VISIT_CATALOGUE: &str = "catalogue";
const ENV_VISIT_ID: &str = "BEACH_CMDS_VISIT_ID";
const ENV_VISIT_NAME: &str = "BEACH_CMDS_VISIT_NAME";

/// Run the beach CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Visit(args) => run_visit(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "beach",
    about = "Score beach conditions from Open-Meteo forecasts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score current and forecast conditions for a beach.
    Score(ScoreArgs),
    /// Record a visit in the recent-beach history.
    Visit(VisitArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match beach_data::fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
