//! Focused unit tests covering `translate` configuration resolution.

use super::*;
use crate::translate::{TranslateConfig, TranslateSource};
use camino::Utf8PathBuf;
use rstest::rstest;
use translations_core::GeometryType;

fn categories(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

#[rstest]
fn converting_without_input_errors() {
    let err = TranslateConfig::try_from(TranslateArgs::default())
        .expect_err("missing input should error");
    match err {
        CliError::NothingToTranslate {
            categories,
            attributes,
        } => {
            assert_eq!(categories, ARG_CATEGORY);
            assert_eq!(attributes, ARG_ATTRIBUTES);
        }
        other => panic!("expected NothingToTranslate, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_defaults() {
    let args = TranslateArgs {
        category: categories(&["school"]),
        ..TranslateArgs::default()
    };
    let config = TranslateConfig::try_from(args).expect("config should build");
    assert_eq!(
        config,
        TranslateConfig {
            source: TranslateSource::Categories(categories(&["school"])),
            category_attribute: "category".to_owned(),
            layer: "wikimapia".to_owned(),
            geometry: GeometryType::Point,
        }
    );
}

#[rstest]
fn attribute_file_takes_precedence() {
    let args = TranslateArgs {
        category: categories(&["school"]),
        attributes: Some(Utf8PathBuf::from("record.json")),
        ..TranslateArgs::default()
    };
    let config = TranslateConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.source,
        TranslateSource::Attributes(Utf8PathBuf::from("record.json"))
    );
}

#[rstest]
#[case("area", GeometryType::Area)]
#[case("LINE", GeometryType::Line)]
#[case("Collection", GeometryType::Collection)]
fn converting_parses_geometry(#[case] raw: &str, #[case] expected: GeometryType) {
    let args = TranslateArgs {
        category: categories(&["lake"]),
        geometry: Some(raw.to_owned()),
        ..TranslateArgs::default()
    };
    let config = TranslateConfig::try_from(args).expect("config should build");
    assert_eq!(config.geometry, expected);
}

#[rstest]
fn converting_rejects_unknown_geometry() {
    let args = TranslateArgs {
        category: categories(&["lake"]),
        geometry: Some("polygon".to_owned()),
        ..TranslateArgs::default()
    };
    let err = TranslateConfig::try_from(args).expect_err("unknown geometry should error");
    assert!(matches!(err, CliError::InvalidGeometry(_)), "{err:?}");
}

#[rstest]
fn cli_rejects_categories_alongside_attributes() {
    let err = Cli::try_parse_from([
        "osm-translate",
        "translate",
        "--category",
        "school",
        "--attributes",
        "record.json",
    ])
    .expect_err("conflicting inputs should be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[rstest]
fn cli_collects_repeated_categories() {
    let cli = Cli::try_parse_from([
        "osm-translate",
        "translate",
        "--category",
        "school",
        "--category",
        "lake",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Translate(args) => assert_eq!(args.category, categories(&["school", "lake"])),
        other => panic!("expected translate command, found {other:?}"),
    }
}

#[rstest]
#[case(ARG_LAYER, "roads")]
#[case(ARG_GEOMETRY, "area")]
#[case(ARG_CATEGORY_ATTRIBUTE, "kind")]
fn record_options_require_an_attribute_file(#[case] flag: &str, #[case] value: &str) {
    let long = format!("--{flag}");
    let err = Cli::try_parse_from([
        "osm-translate",
        "translate",
        "--category",
        "school",
        long.as_str(),
        value,
    ])
    .expect_err("record options need --attributes");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[rstest]
fn record_options_accompany_an_attribute_file() {
    let cli = Cli::try_parse_from([
        "osm-translate",
        "translate",
        "--attributes",
        "record.json",
        "--layer",
        "roads",
        "--geometry",
        "line",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Translate(args) => {
            assert_eq!(args.layer.as_deref(), Some("roads"));
            assert_eq!(args.geometry.as_deref(), Some("line"));
        }
        other => panic!("expected translate command, found {other:?}"),
    }
}
