//! Behaviour-driven step definitions driving the translate CLI scenarios.

use super::helpers::{utf8_tempdir, write_utf8};
use super::*;
use crate::translate::{TranslateConfig, execute_translate};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;
use tempfile::TempDir;

const RECORD_NAME: &str = "Riverside Clinic";

#[derive(Debug)]
struct TranslateWorld {
    _tmp: TempDir,
    record_path: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl TranslateWorld {
    fn new() -> Self {
        let (tmp, root) = utf8_tempdir();
        Self {
            _tmp: tmp,
            record_path: root.join("record.json"),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["osm-translate".to_owned(), "translate".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn output(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }

    fn use_record(&self) {
        self.cli_args
            .borrow_mut()
            .extend([format!("--{ARG_ATTRIBUTES}"), self.record_path.to_string()]);
    }
}

#[fixture]
fn world() -> TranslateWorld {
    TranslateWorld::new()
}

#[given("the categories {first} and {second}")]
fn the_categories(#[from(world)] world: &TranslateWorld, first: String, second: String) {
    let mut args = world.cli_args.borrow_mut();
    for label in [first, second] {
        args.push(format!("--{ARG_CATEGORY}"));
        args.push(label.trim_matches('"').to_owned());
    }
}

#[given("an attribute record with category {label}")]
fn an_attribute_record(#[from(world)] world: &TranslateWorld, label: String) {
    let record = serde_json::json!({
        "category": label.trim_matches('"'),
        "name": RECORD_NAME,
    });
    let payload = serde_json::to_vec(&record).expect("serialize record");
    write_utf8(&world.record_path, &payload);
    world.use_record();
}

#[given("an attribute record path that does not exist")]
fn a_missing_record(#[from(world)] world: &TranslateWorld) {
    world.use_record();
}

#[when("I run the translate command")]
fn run_translate_command(#[from(world)] world: &TranslateWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Translate(args) => {
            let config = TranslateConfig::try_from(args)?;
            let mut buffer = world.stdout.borrow_mut();
            execute_translate(&config, &mut *buffer)
        }
        other => panic!("expected translate command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints {key}={value}")]
fn command_prints_tag(#[from(world)] world: &TranslateWorld, key: String, value: String) {
    let output = world.output();
    let tags = output.get("tags").unwrap_or(&output);
    assert_eq!(tags[key.as_str()], Value::String(value));
}

#[then("the command reports {label} as unresolved")]
fn command_reports_unresolved(#[from(world)] world: &TranslateWorld, label: String) {
    let output = world.output();
    assert_eq!(output["unresolved"], serde_json::json!([label.trim_matches('"')]));
}

#[then("the record keeps its name")]
fn record_keeps_name(#[from(world)] world: &TranslateWorld) {
    let output = world.output();
    assert_eq!(output["name"], RECORD_NAME);
    assert!(output.get("category").is_none(), "category should be consumed");
}

#[then("the command fails because the attribute record is missing")]
fn command_fails_missing_record(#[from(world)] world: &TranslateWorld) {
    let error = world.error();
    assert!(error.starts_with("MissingSourceFile"), "{error}");
}

#[then("the command fails because there is nothing to translate")]
fn command_fails_nothing_to_translate(#[from(world)] world: &TranslateWorld) {
    let error = world.error();
    assert!(error.starts_with("NothingToTranslate"), "{error}");
}

macro_rules! register_translate_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/translate_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: TranslateWorld) {
            let _ = world;
        }
    };
}

register_translate_scenario!(translate_categories, "translating listed categories");
register_translate_scenario!(translate_record, "translating an attribute record");
register_translate_scenario!(translate_missing_record, "rejecting a missing attribute record");
register_translate_scenario!(translate_nothing, "rejecting an empty invocation");
