//! Error types emitted by the beach CLI.

use std::sync::Arc;

use beach_core::PlaceError;
use beach_data::{HistoryStoreError, NormaliseError, SnapshotError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the beach CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the saved payloads failed.
    #[error(transparent)]
    LoadSnapshot(#[from] SnapshotError),
    /// The forecast could not be turned into a reading.
    #[error("failed to read current conditions: {0}")]
    Normalise(#[from] NormaliseError),
    /// The visit details were rejected.
    #[error("invalid visit: {0}")]
    InvalidVisit(#[source] PlaceError),
    /// Loading or saving the recent-beach history failed.
    #[error(transparent)]
    History(#[from] HistoryStoreError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
