//! Helpers for running commands against in-memory writers and temp files.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    (dir, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn run_args(args: &[&str]) -> Result<Value, CliError> {
    let cli = Cli::try_parse_from(args)?;
    let mut buffer = Vec::new();
    run_with(cli, &mut buffer)?;
    Ok(parse_output(&buffer))
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
