//! Behaviour-driven step definitions driving the extract CLI scenarios.

use super::extract::run_extract_with;
use super::helpers::{Workspace, mixed_dataset, parse_output, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tabgeo_data::SettingsError;

#[derive(Debug)]
struct ExtractWorld {
    workspace: Workspace,
    dataset: Utf8PathBuf,
    include_dataset: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    output: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ExtractWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let dataset = workspace.path("rows.json");
        Self {
            workspace,
            dataset,
            include_dataset: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            output: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["tabgeo".to_owned(), "extract".to_owned()];
        if *self.include_dataset.borrow() {
            argv.push(self.dataset.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> ExtractWorld {
    ExtractWorld::new()
}

#[given("a mixed dataset exists on disk")]
fn mixed_dataset_exists(#[from(world)] world: &ExtractWorld) {
    write_utf8(&world.dataset, mixed_dataset().as_bytes());
}

#[given("I request output to a nested file")]
fn request_nested_output(#[from(world)] world: &ExtractWorld) {
    let target = world.workspace.path("out/nested/records.json");
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_OUTPUT}"), target.as_str().to_owned()]);
    world.output.replace(Some(target));
}

#[given("I request a precision of 12 digits")]
fn request_excessive_precision(#[from(world)] world: &ExtractWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PRECISION}"), "12".to_owned()]);
}

#[given("I omit the dataset path")]
fn omit_dataset_path(#[from(world)] world: &ExtractWorld) {
    *world.include_dataset.borrow_mut() = false;
}

#[when("I run the extract command")]
fn run_extract_command(#[from(world)] world: &ExtractWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Extract(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_extract_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints two records and one diagnostic")]
fn command_prints_records(#[from(world)] world: &ExtractWorld) {
    {
        let borrowed = world.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        assert!(result.is_ok(), "expected success, got {result:?}");
    }
    let output = parse_output(&world.stdout.borrow());
    let records = output["records"].as_array().expect("records array");
    assert_eq!(records.len(), 2);
    let diagnostics = output["diagnostics"].as_array().expect("diagnostics array");
    assert_eq!(diagnostics.len(), 1);
}

#[then("the output file holds two records and stdout stays empty")]
fn output_file_holds_records(#[from(world)] world: &ExtractWorld) {
    {
        let borrowed = world.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        assert!(result.is_ok(), "expected success, got {result:?}");
    }
    assert!(world.stdout.borrow().is_empty());
    let target = world.output.borrow().clone().expect("output path recorded");
    let contents = std::fs::read(&target).expect("output file written");
    let output = parse_output(&contents);
    assert_eq!(output["records"].as_array().map(Vec::len), Some(2));
}

#[then("the command fails because the dataset path is missing")]
fn command_fails_missing_dataset(#[from(world)] world: &ExtractWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_DATASET),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the settings are invalid")]
fn command_fails_invalid_settings(#[from(world)] world: &ExtractWorld) {
    match &*world.expect_error() {
        CliError::InvalidSettings(SettingsError::PrecisionOutOfRange { precision }) => {
            assert_eq!(*precision, 12);
        }
        other => panic!("expected InvalidSettings, found {other:?}"),
    }
}

macro_rules! register_extract_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/extract_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ExtractWorld) {
            let _ = world;
        }
    };
}

register_extract_scenario!(extract_to_stdout, "extracting a dataset to stdout");
register_extract_scenario!(extract_to_file, "writing extraction output to a file");
register_extract_scenario!(extract_missing_dataset, "rejecting missing dataset paths");
register_extract_scenario!(extract_invalid_precision, "rejecting an excessive precision");
