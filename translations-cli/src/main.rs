//! Entry point for the `osm-translate` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use translations_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() -> ExitCode {
    match translations_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("osm-translate: {err}");
            ExitCode::FAILURE
        }
    }
}
