//! Focused unit tests covering extract CLI configuration and output.

use super::extract::{ExtractArgs, ExtractConfig, config_from_layers_for_test, run_extract_with};
use super::helpers::{Workspace, mixed_dataset, parse_output, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tabgeo_core::GeometryKind;
use tabgeo_data::{DEFAULT_PRECISION, SettingsError};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn args_for(dataset: Utf8PathBuf) -> ExtractArgs {
    ExtractArgs {
        dataset: Some(dataset),
        ..ExtractArgs::default()
    }
}

#[rstest]
fn converting_without_dataset_errors() {
    let err = ExtractConfig::try_from(ExtractArgs::default()).expect_err("dataset is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(env, ENV_DATASET);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_default_labels_and_precision() {
    let config = ExtractConfig::try_from(args_for(Utf8PathBuf::from("rows.json")))
        .expect("config should build");
    assert_eq!(config.settings.precision(), DEFAULT_PRECISION);
    assert_eq!(config.settings.labels().label(GeometryKind::Polygon), "polygon");
    assert_eq!(config.output, None);
}

#[rstest]
fn converting_uses_overridden_labels() {
    let args = ExtractArgs {
        polygon_label: Some("Area".to_owned()),
        precision: Some(5),
        ..args_for(Utf8PathBuf::from("rows.json"))
    };
    let config = ExtractConfig::try_from(args).expect("config should build");
    assert_eq!(config.settings.labels().label(GeometryKind::Polygon), "Area");
    assert_eq!(config.settings.labels().label(GeometryKind::Scatter), "scatter");
    assert_eq!(config.settings.precision(), 5);
}

#[rstest]
fn converting_rejects_excessive_precision() {
    let args = ExtractArgs {
        precision: Some(11),
        ..args_for(Utf8PathBuf::from("rows.json"))
    };
    match ExtractConfig::try_from(args) {
        Err(CliError::InvalidSettings(SettingsError::PrecisionOutOfRange { precision })) => {
            assert_eq!(precision, 11);
        }
        other => panic!("expected InvalidSettings, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_dataset(workspace: Workspace) {
    let config = ExtractConfig::try_from(args_for(workspace.path("absent.json")))
        .expect("config should build");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_DATASET),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    let folder = workspace.path("folder");
    std::fs::create_dir(&folder).expect("create folder");
    let config = ExtractConfig::try_from(args_for(folder.clone())).expect("config should build");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, path }) => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(path, folder);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn extract_writes_records_and_diagnostics(workspace: Workspace) {
    let dataset = workspace.path("rows.json");
    write_utf8(&dataset, mixed_dataset().as_bytes());
    let mut buffer = Vec::new();

    run_extract_with(args_for(dataset), &mut buffer).expect("extract should succeed");

    let output = parse_output(&buffer);
    let records = output["records"].as_array().expect("records array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kind"], "scatter");
    assert_eq!(records[0]["data"]["lat"], 10.0);
    assert_eq!(records[0]["properties"]["fill_color"], "#ff0000");
    assert_eq!(records[1]["kind"], "polygon");
    assert_eq!(records[1]["selection"]["geometry_id"], "g2");
    assert_eq!(
        output["diagnostics"],
        serde_json::json!(["Geometry g3: invalid geometry type \"hexagon\""])
    );
    assert_eq!(output["rejected_rows"], 1);
}

#[rstest]
fn extract_reports_malformed_datasets(workspace: Workspace) {
    let dataset = workspace.path("broken.json");
    write_utf8(&dataset, b"{ not json");
    let mut buffer = Vec::new();

    let err = run_extract_with(args_for(dataset), &mut buffer).expect_err("parse should fail");
    match err {
        CliError::LoadDataset(source) => {
            assert!(matches!(*source, tabgeo_data::LoadTableError::Parse { .. }));
        }
        other => panic!("expected LoadDataset, found {other:?}"),
    }
    assert!(buffer.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "precision": "fine" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_dataset = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "precision": 4,
            "line_label": "route",
            "arc_label": "flight",
        }),
        None,
    );
    composer.push_environment(json!({
        "dataset": env_dataset.as_str(),
        "arc_label": "hop",
    }));
    composer.push_cli(json!({
        "line_label": "road",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.dataset, env_dataset);
    assert_eq!(config.settings.precision(), 4);
    assert_eq!(config.settings.labels().label(GeometryKind::Line), "road");
    assert_eq!(config.settings.labels().label(GeometryKind::Arc), "hop");
}
