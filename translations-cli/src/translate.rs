//! `translate` command: run the category translator over CLI input.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use translations_core::{Attributes, GeometryType, Translator};
use translations_wikimapia::{CategoryTranslator, DEFAULT_CATEGORY_ATTRIBUTE};

use crate::{
    ARG_ATTRIBUTES, ARG_CATEGORY, ARG_CATEGORY_ATTRIBUTE, ARG_GEOMETRY, ARG_LAYER, CliError,
    write_json,
};

const DEFAULT_LAYER: &str = "wikimapia";

/// CLI arguments for the `translate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Translate Wikimapia categories into OSM tags. Either list \
                  the categories with repeated --category flags, or point \
                  --attributes at a JSON object holding one attribute record \
                  whose category attribute lists them. The record options \
                  (--category-attribute, --layer, --geometry) require \
                  --attributes.",
    about = "Translate categories or an attribute record"
)]
#[ortho_config(prefix = "OSM_TRANSLATE")]
pub(crate) struct TranslateArgs {
    /// Category label to translate; repeat for several.
    #[arg(long = ARG_CATEGORY, value_name = "label")]
    #[serde(default)]
    pub(crate) category: Vec<String>,
    /// JSON file holding a single attribute record.
    #[arg(long = ARG_ATTRIBUTES, value_name = "path", conflicts_with = "category")]
    #[serde(default)]
    pub(crate) attributes: Option<Utf8PathBuf>,
    /// Attribute holding the category list (default `category`). Only read
    /// with `--attributes`.
    #[arg(long = ARG_CATEGORY_ATTRIBUTE, value_name = "name", requires = "attributes")]
    #[serde(default)]
    pub(crate) category_attribute: Option<String>,
    /// Layer name reported to the translator (default `wikimapia`). Only
    /// read with `--attributes`.
    #[arg(long = ARG_LAYER, value_name = "name", requires = "attributes")]
    #[serde(default)]
    pub(crate) layer: Option<String>,
    /// Geometry of the record: point, line, area or collection. Only read
    /// with `--attributes`.
    #[arg(long = ARG_GEOMETRY, value_name = "type", requires = "attributes")]
    #[serde(default)]
    pub(crate) geometry: Option<String>,
}

impl TranslateArgs {
    pub(crate) fn into_config(self) -> Result<TranslateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TranslateConfig::try_from(merged)
    }
}

/// What the `translate` command reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TranslateSource {
    /// Labels given directly on the command line.
    Categories(Vec<String>),
    /// A JSON attribute record on disk.
    Attributes(Utf8PathBuf),
}

/// Resolved `translate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranslateConfig {
    pub(crate) source: TranslateSource,
    pub(crate) category_attribute: String,
    pub(crate) layer: String,
    pub(crate) geometry: GeometryType,
}

impl TryFrom<TranslateArgs> for TranslateConfig {
    type Error = CliError;

    fn try_from(args: TranslateArgs) -> Result<Self, Self::Error> {
        let source = match (args.attributes, args.category) {
            (Some(path), _) => TranslateSource::Attributes(path),
            (None, categories) if !categories.is_empty() => {
                TranslateSource::Categories(categories)
            }
            (None, _) => {
                return Err(CliError::NothingToTranslate {
                    categories: ARG_CATEGORY,
                    attributes: ARG_ATTRIBUTES,
                });
            }
        };
        let geometry = args
            .geometry
            .as_deref()
            .map_or(Ok(GeometryType::Point), str::parse::<GeometryType>)?;
        Ok(Self {
            source,
            category_attribute: args
                .category_attribute
                .unwrap_or_else(|| DEFAULT_CATEGORY_ATTRIBUTE.to_owned()),
            layer: args.layer.unwrap_or_else(|| DEFAULT_LAYER.to_owned()),
            geometry,
        })
    }
}

/// JSON emitted for a list of categories.
#[derive(Debug, Serialize)]
struct CategoryOutput {
    tags: BTreeMap<String, String>,
    matched: Vec<String>,
    unresolved: Vec<String>,
}

pub(crate) fn run_translate(args: &TranslateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.clone().into_config()?;
    execute_translate(&config, writer)
}

pub(crate) fn execute_translate(
    config: &TranslateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let translator = CategoryTranslator::new().with_attribute(config.category_attribute.as_str());
    match &config.source {
        TranslateSource::Categories(labels) => {
            let (tags, report) = translator.translate_categories(labels.iter().map(String::as_str));
            let output = CategoryOutput {
                tags: tags.into_iter().collect(),
                matched: report.matched,
                unresolved: report.unresolved,
            };
            write_json(writer, &output)
        }
        TranslateSource::Attributes(path) => {
            let attrs = load_attributes(path)?;
            let tags = translator.to_osm(attrs, &config.layer, config.geometry.as_str());
            let sorted: BTreeMap<String, String> = tags.into_iter().collect();
            write_json(writer, &sorted)
        }
    }
}

fn load_attributes(path: &Utf8Path) -> Result<Attributes, CliError> {
    require_existing(path, ARG_ATTRIBUTES)?;
    let raw = translations_fs::read_utf8_file(path).map_err(|source| CliError::ReadSource {
        field: ARG_ATTRIBUTES,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseAttributes {
        path: path.to_path_buf(),
        source,
    })
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match translations_fs::file_is_file(path) {
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
        Err(source) => Err(CliError::ReadSource {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
