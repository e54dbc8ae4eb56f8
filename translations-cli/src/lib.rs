//! Command-line interface over the OSM translation tables.
//!
//! The `osm-translate` binary exposes the Wikimapia category table to shell
//! pipelines: look up a single label, translate category lists or attribute
//! records, and export the whole table as JSON. Options for `translate` and
//! `export` may also come from configuration files or `OSM_TRANSLATE_*`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod export;
mod lookup;
mod translate;

pub use error::CliError;

use export::ExportArgs;
use lookup::LookupArgs;
use translate::TranslateArgs;

pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_ATTRIBUTES: &str = "attributes";
pub(crate) const ARG_CATEGORY_ATTRIBUTE: &str = "category-attribute";
pub(crate) const ARG_LAYER: &str = "layer";
pub(crate) const ARG_GEOMETRY: &str = "geometry";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_INCLUDE_RETIRED: &str = "include-retired";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, configuration cannot be
/// merged, inputs cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Lookup(args) => lookup::run_lookup(&args, writer),
        Command::Translate(args) => translate::run_translate(&args, writer),
        Command::Export(args) => export::run_export(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "osm-translate",
    about = "Translate Wikimapia categories into OpenStreetMap tags",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the tags for one category label.
    Lookup(LookupArgs),
    /// Translate category lists or attribute records.
    Translate(TranslateArgs),
    /// Dump the category table as JSON.
    Export(ExportArgs),
}

pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value).map_err(CliError::SerializeOutput)?;
    writeln!(writer).map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
