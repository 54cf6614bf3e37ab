//! Error types raised at the data boundary.

use beach_core::WeatherReadingError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while turning provider payloads into a reading.
#[derive(Debug, Error, PartialEq)]
pub enum NormaliseError {
    /// The forecast service answered with an error body.
    #[error("forecast provider rejected the request: {reason}")]
    Provider {
        /// Reason reported by the provider.
        reason: String,
    },
    /// The forecast has no `current` block.
    #[error("forecast does not contain current conditions")]
    MissingCurrent,
    /// A value the scorer requires was `null` or absent.
    #[error("current conditions are missing `{field}`")]
    MissingField {
        /// Provider field name.
        field: &'static str,
    },
    /// The values were present but unusable.
    #[error("current conditions are invalid")]
    InvalidReading {
        /// Validation failure from `beach-core`.
        #[source]
        source: WeatherReadingError,
    },
}

/// Errors raised while loading provider payloads from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading a payload file failed.
    #[error("failed to read {path}")]
    ReadFile {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A payload file was not valid JSON for its schema.
    #[error("failed to parse {path}")]
    ParseJson {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading or saving the recent-beach history.
#[derive(Debug, Error)]
pub enum HistoryStoreError {
    /// Reading an existing history file failed.
    #[error("failed to read history file at {path}")]
    Read {
        /// History file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A beach catalogue file was not a JSON list of visits.
    #[error("failed to parse beach catalogue at {path}")]
    ParseCatalogue {
        /// Catalogue file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the parent directory for the history file failed.
    #[error("failed to create parent directory for {path}")]
    CreateParent {
        /// History file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the history failed.
    #[error("failed to serialise history")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the history file failed.
    #[error("failed to write history file at {path}")]
    Write {
        /// History file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
