//! `export` command: dump the category table as JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use translations_wikimapia::{CategoryRule, CategoryRules};

use crate::{ARG_INCLUDE_RETIRED, ARG_OUTPUT, CliError, write_json};

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Dump every Wikimapia category rule as JSON, in table \
                  order, with its tags and upstream usage count. The output \
                  doubles as a golden file for downstream consumers.",
    about = "Export the category table"
)]
#[ortho_config(prefix = "OSM_TRANSLATE")]
pub(crate) struct ExportArgs {
    /// Write the export to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Also list rules withdrawn from the table.
    #[arg(long = ARG_INCLUDE_RETIRED)]
    #[serde(default)]
    pub(crate) include_retired: bool,
}

#[derive(Debug, Serialize)]
struct TableExport {
    rules: &'static [CategoryRule],
    #[serde(skip_serializing_if = "Option::is_none")]
    retired: Option<&'static [CategoryRule]>,
}

impl TableExport {
    fn new(rules: &CategoryRules, include_retired: bool) -> Self {
        Self {
            rules: rules.as_slice(),
            retired: include_retired.then_some(rules.retired()),
        }
    }
}

pub(crate) fn run_export(args: &ExportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.clone().load_and_merge().map_err(CliError::Configuration)?;
    execute_export(&merged, writer)
}

pub(crate) fn execute_export(args: &ExportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let export = TableExport::new(CategoryRules::wikimapia(), args.include_retired);
    match &args.output {
        Some(path) => {
            let bytes = serde_json::to_vec_pretty(&export).map_err(CliError::SerializeOutput)?;
            translations_fs::write_utf8_file(path, &bytes).map_err(|source| {
                CliError::WriteExport {
                    path: path.clone(),
                    source,
                }
            })?;
            Ok(())
        }
        None => write_json(writer, &export),
    }
}
