//! Extract command implementation for the tabgeo CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tabgeo_core::{DecodeCache, GeometryRecord};
use tabgeo_data::{
    DEFAULT_PRECISION, ExtractionReport, ExtractionSettings, SelectionId, TypeLabels,
    extract_geometries, load_table,
};

use crate::{
    ARG_ARC_LABEL, ARG_DATASET, ARG_LINE_LABEL, ARG_OUTPUT, ARG_PATH_LABEL, ARG_POLYGON_LABEL,
    ARG_PRECISION, ARG_SCATTER_LABEL, CliError, ENV_DATASET,
};

/// CLI arguments for the `extract` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Classify every row of a JSON dataset by its type label and \
                 write the resulting geometry records as JSON. Labels and the \
                 decode precision can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Extract geometry records from a dataset"
)]
#[ortho_config(prefix = "TABGEO")]
pub(crate) struct ExtractArgs {
    /// Path to a JSON dataset (`{"columns": {...}}`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Type label identifying scatter rows.
    #[arg(long = ARG_SCATTER_LABEL, value_name = "label")]
    #[serde(default)]
    pub(crate) scatter_label: Option<String>,
    /// Type label identifying line rows.
    #[arg(long = ARG_LINE_LABEL, value_name = "label")]
    #[serde(default)]
    pub(crate) line_label: Option<String>,
    /// Type label identifying arc rows.
    #[arg(long = ARG_ARC_LABEL, value_name = "label")]
    #[serde(default)]
    pub(crate) arc_label: Option<String>,
    /// Type label identifying path rows.
    #[arg(long = ARG_PATH_LABEL, value_name = "label")]
    #[serde(default)]
    pub(crate) path_label: Option<String>,
    /// Type label identifying polygon rows.
    #[arg(long = ARG_POLYGON_LABEL, value_name = "label")]
    #[serde(default)]
    pub(crate) polygon_label: Option<String>,
    /// Decimal digits used when decoding compressed coordinates (0-10).
    #[arg(long = ARG_PRECISION, value_name = "digits")]
    #[serde(default)]
    pub(crate) precision: Option<u8>,
    /// Write the JSON output here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExtractArgs {
    pub(crate) fn into_config(self) -> Result<ExtractConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExtractConfig::try_from(merged)
    }
}

/// Resolved `extract` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractConfig {
    /// Dataset to read.
    pub(crate) dataset: Utf8PathBuf,
    /// Validated extraction settings.
    pub(crate) settings: ExtractionSettings,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExtractConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.dataset;
        match tabgeo_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_DATASET,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_DATASET,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_DATASET,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<ExtractArgs> for ExtractConfig {
    type Error = CliError;

    fn try_from(args: ExtractArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DATASET,
        })?;

        let defaults = TypeLabels::default();
        let labels = TypeLabels {
            scatter: args.scatter_label.unwrap_or(defaults.scatter),
            line: args.line_label.unwrap_or(defaults.line),
            arc: args.arc_label.unwrap_or(defaults.arc),
            path: args.path_label.unwrap_or(defaults.path),
            polygon: args.polygon_label.unwrap_or(defaults.polygon),
        };
        let settings =
            ExtractionSettings::new(labels, args.precision.unwrap_or(DEFAULT_PRECISION))?;

        Ok(Self {
            dataset,
            settings,
            output: args.output,
        })
    }
}

/// JSON document written by the `extract` command.
#[derive(Debug, Serialize)]
struct ExtractOutput<'a> {
    records: &'a [GeometryRecord<SelectionId>],
    diagnostics: Vec<String>,
    rejected_rows: usize,
}

impl<'a> From<&'a ExtractionReport<SelectionId>> for ExtractOutput<'a> {
    fn from(report: &'a ExtractionReport<SelectionId>) -> Self {
        Self {
            records: &report.records,
            diagnostics: report.diagnostics.surfaced(),
            rejected_rows: report.diagnostics.rejected_rows(),
        }
    }
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_extract_with(args, &mut stdout)
}

/// Run `extract`, writing to `writer` unless an output path is configured.
pub(crate) fn run_extract_with(args: ExtractArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_extract_config(args)?;
    let report = execute_extract(&config)?;
    match &config.output {
        Some(path) => {
            let mut file =
                tabgeo_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_extract_output(&mut file, &report)?;
            info!("Wrote {} records to {path}", report.records.len());
            Ok(())
        }
        None => write_extract_output(writer, &report),
    }
}

fn resolve_extract_config(args: ExtractArgs) -> Result<ExtractConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_extract(config: &ExtractConfig) -> Result<ExtractionReport<SelectionId>, CliError> {
    let table = load_dataset(&config.dataset)?;
    let mut cache = DecodeCache::new();
    Ok(extract_geometries(&table, &config.settings, &mut cache))
}

fn load_dataset(path: &Utf8Path) -> Result<tabgeo_data::Table, CliError> {
    load_table(path).map_err(|err| CliError::LoadDataset(Box::new(err)))
}

fn write_extract_output(
    writer: &mut dyn Write,
    report: &ExtractionReport<SelectionId>,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(&ExtractOutput::from(report))
        .map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ExtractConfig, CliError> {
    let merged = ExtractArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ExtractConfig::try_from(merged)
}
