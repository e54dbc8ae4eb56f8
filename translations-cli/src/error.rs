//! Error types emitted by the translation CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the translation CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The requested label has no rule in the table.
    #[error("no Wikimapia rule for category {label:?}")]
    UnknownCategory {
        /// Label as given on the command line.
        label: String,
    },
    /// `translate` was given neither categories nor an attribute file.
    #[error("nothing to translate (set --{categories} or --{attributes})")]
    NothingToTranslate {
        /// Flag naming category labels.
        categories: &'static str,
        /// Flag naming an attribute file.
        attributes: &'static str,
    },
    /// The geometry option named no known geometry.
    #[error(transparent)]
    InvalidGeometry(#[from] translations_core::ParseGeometryTypeError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be read.
    #[error("failed to read {field} path {path:?}: {source}")]
    ReadSource {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The attribute file did not hold a JSON object of strings.
    #[error("failed to parse attributes JSON at {path:?}: {source}")]
    ParseAttributes {
        /// Attribute file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the export file failed.
    #[error("failed to write export to {path:?}: {source}")]
    WriteExport {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
