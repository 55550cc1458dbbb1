//! Command-line interface for tabgeo's offline extraction tooling.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod extract;

pub use error::CliError;
use extract::{ExtractArgs, run_extract};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_PRECISION: &str = "precision";
pub(crate) const ARG_SCATTER_LABEL: &str = "scatter-label";
pub(crate) const ARG_LINE_LABEL: &str = "line-label";
pub(crate) const ARG_ARC_LABEL: &str = "arc-label";
pub(crate) const ARG_PATH_LABEL: &str = "path-label";
pub(crate) const ARG_POLYGON_LABEL: &str = "polygon-label";
pub(crate) const ENV_DATASET: &str = "TABGEO_CMDS_EXTRACT_DATASET";

/// Run the tabgeo CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the dataset or the
/// output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Extract(args) => run_extract(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tabgeo",
    about = "Offline geometry extraction from tabular datasets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract typed geometry records from a JSON dataset.
    Extract(ExtractArgs),
}

#[cfg(test)]
mod tests;
