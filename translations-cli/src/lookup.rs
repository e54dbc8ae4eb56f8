//! `lookup` command: print the tags for a single category.

use std::collections::BTreeMap;
use std::io::Write;

use clap::Parser;
use translations_wikimapia::lookup;

use crate::{CliError, write_json};

/// CLI arguments for the `lookup` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    about = "Print the OSM tags for a Wikimapia category",
    long_about = "Print the OSM tags for a Wikimapia category as a JSON \
                  object. The label must match the table exactly, including \
                  case and punctuation."
)]
pub(crate) struct LookupArgs {
    /// Category label, matched exactly.
    #[arg(value_name = "label")]
    pub(crate) label: String,
}

pub(crate) fn run_lookup(args: &LookupArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let tags = sorted_tags(&args.label)?;
    write_json(writer, &tags)
}

fn sorted_tags(label: &str) -> Result<BTreeMap<&'static str, &'static str>, CliError> {
    let rule = lookup(label).ok_or_else(|| CliError::UnknownCategory {
        label: label.to_owned(),
    })?;
    Ok(rule.tag_pairs().iter().copied().collect())
}
