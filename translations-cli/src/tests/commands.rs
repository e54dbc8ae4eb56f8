//! Command output tests driven through in-memory writers.

use super::helpers::{parse_output, run_args, utf8_tempdir, write_utf8};
use super::*;
use crate::export::execute_export;
use crate::translate::{TranslateConfig, TranslateSource, execute_translate};
use rstest::rstest;
use serde_json::{Value, json};
use std::fs;
use translations_core::GeometryType;

fn category_config(labels: &[&str]) -> TranslateConfig {
    TranslateConfig {
        source: TranslateSource::Categories(
            labels.iter().map(|label| (*label).to_owned()).collect(),
        ),
        category_attribute: "category".to_owned(),
        layer: "wikimapia".to_owned(),
        geometry: GeometryType::Point,
    }
}

fn translate(config: &TranslateConfig) -> Result<Value, CliError> {
    let mut buffer = Vec::new();
    execute_translate(config, &mut buffer)?;
    Ok(parse_output(&buffer))
}

#[rstest]
#[case("school", json!({"amenity": "school"}))]
#[case("lake", json!({"natural": "water", "water": "lake"}))]
fn lookup_prints_tags(#[case] label: &str, #[case] expected: Value) {
    let output = run_args(&["osm-translate", "lookup", label]).expect("lookup succeeds");
    assert_eq!(output, expected);
}

#[rstest]
fn lookup_reports_unknown_label() {
    let err = run_args(&["osm-translate", "lookup", "School"]).expect_err("label is unknown");
    match err {
        CliError::UnknownCategory { label } => assert_eq!(label, "School"),
        other => panic!("expected UnknownCategory, found {other:?}"),
    }
}

#[rstest]
fn translating_categories_reports_unresolved_labels() {
    let output = translate(&category_config(&["school", "stone circle"])).expect("translate");
    assert_eq!(
        output,
        json!({
            "tags": {"amenity": "school", "rawWmCategory": "stone_circle"},
            "matched": ["school"],
            "unresolved": ["stone circle"],
        })
    );
}

#[rstest]
fn translating_attribute_file_replaces_category() {
    let (_dir, root) = utf8_tempdir();
    let record = root.join("record.json");
    write_utf8(&record, br#"{"name": "Lakeside", "kind": "hospital;lake"}"#);
    let config = TranslateConfig {
        source: TranslateSource::Attributes(record),
        category_attribute: "kind".to_owned(),
        ..category_config(&[])
    };

    let output = translate(&config).expect("translate");
    assert_eq!(
        output,
        json!({
            "amenity": "hospital",
            "name": "Lakeside",
            "natural": "water",
            "water": "lake",
        })
    );
}

#[rstest]
fn translating_missing_file_errors() {
    let (_dir, root) = utf8_tempdir();
    let config = TranslateConfig {
        source: TranslateSource::Attributes(root.join("missing.json")),
        ..category_config(&[])
    };
    let err = translate(&config).expect_err("missing file should error");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_ATTRIBUTES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn translating_directory_errors() {
    let (_dir, root) = utf8_tempdir();
    let config = TranslateConfig {
        source: TranslateSource::Attributes(root.clone()),
        ..category_config(&[])
    };
    let err = translate(&config).expect_err("directory should be rejected");
    assert!(matches!(err, CliError::SourcePathNotFile { .. }), "{err:?}");
}

#[rstest]
fn translating_malformed_json_errors() {
    let (_dir, root) = utf8_tempdir();
    let record = root.join("record.json");
    write_utf8(&record, b"[1, 2, 3]");
    let config = TranslateConfig {
        source: TranslateSource::Attributes(record),
        ..category_config(&[])
    };
    let err = translate(&config).expect_err("array is not a record");
    assert!(matches!(err, CliError::ParseAttributes { .. }), "{err:?}");
}

#[rstest]
#[case(false, 0)]
#[case(true, 3)]
fn export_lists_table(#[case] include_retired: bool, #[case] retired: usize) {
    let args = ExportArgs {
        output: None,
        include_retired,
    };
    let mut buffer = Vec::new();
    execute_export(&args, &mut buffer).expect("export succeeds");
    let output = parse_output(&buffer);

    let rules = output["rules"].as_array().expect("rules array");
    assert_eq!(rules.len(), 2997);
    assert_eq!(rules[0]["label"], "place without photos");
    assert_eq!(rules[0]["tags"], json!({"place": "yes"}));
    let listed = output
        .get("retired")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    assert_eq!(listed, retired);
}

#[rstest]
fn export_writes_file_and_creates_parents() {
    let (_dir, root) = utf8_tempdir();
    let target = root.join("out/nested/rules.json");
    let args = ExportArgs {
        output: Some(target.clone()),
        include_retired: false,
    };
    let mut buffer = Vec::new();
    execute_export(&args, &mut buffer).expect("export succeeds");

    assert!(buffer.is_empty(), "stdout should stay empty");
    let written = fs::read(target.as_std_path()).expect("export file");
    let output = parse_output(&written);
    assert_eq!(output["rules"].as_array().map(Vec::len), Some(2997));
}
