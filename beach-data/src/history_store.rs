//! JSON persistence for the recent-beach history.
//!
//! A missing or corrupt file loads as an empty history. A beach catalogue, a
//! JSON list of visits with current names and previews, can refresh stored
//! entries as they load.

use std::io;

use beach_core::{RecentBeaches, RecentVisit};
use camino::Utf8Path;
use log::{debug, warn};

use crate::error::HistoryStoreError;
use crate::fs;

/// Load the history stored at `path`.
///
/// Stored entries pass through [`RecentBeaches::from_visits`], so duplicate
/// ids and anything beyond capacity are dropped.
///
/// # Errors
/// Returns [`HistoryStoreError::Read`] when the file exists but cannot be
/// read.
pub fn load_history(path: &Utf8Path) -> Result<RecentBeaches, HistoryStoreError> {
    let payload = match fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!("no history at {path}; starting empty");
            return Ok(RecentBeaches::default());
        }
        Err(source) => {
            return Err(HistoryStoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(serde_json::from_str::<Vec<RecentVisit>>(&payload).map_or_else(
        |err| {
            warn!("ignoring malformed history at {path}: {err}");
            RecentBeaches::default()
        },
        RecentBeaches::from_visits,
    ))
}

/// Load the history at `path` and refresh its entries from `catalogue`.
///
/// # Errors
/// Returns [`HistoryStoreError::Read`] when the history file exists but
/// cannot be read.
pub fn load_history_refreshed(
    path: &Utf8Path,
    catalogue: &[RecentVisit],
) -> Result<RecentBeaches, HistoryStoreError> {
    let history = load_history(path)?;
    if catalogue.is_empty() {
        return Ok(history);
    }
    debug!("refreshing history at {path} from {} catalogue entries", catalogue.len());
    Ok(history.refresh_from(catalogue))
}

/// Load a beach catalogue: a JSON array of visits.
///
/// Unlike the history, a catalogue is never trimmed or deduplicated, and a
/// missing or malformed file is an error.
///
/// # Errors
/// Returns [`HistoryStoreError::Read`] when the file cannot be read and
/// [`HistoryStoreError::ParseCatalogue`] when it is not a list of visits.
pub fn load_catalogue(path: &Utf8Path) -> Result<Vec<RecentVisit>, HistoryStoreError> {
    let payload = fs::read_to_string(path).map_err(|source| HistoryStoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| HistoryStoreError::ParseCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `history` to `path` as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
/// Returns [`HistoryStoreError`] when directories cannot be created, the
/// history cannot be serialised, or the file cannot be written.
pub fn save_history(path: &Utf8Path, history: &RecentBeaches) -> Result<(), HistoryStoreError> {
    fs::ensure_parent_dir(path).map_err(|source| HistoryStoreError::CreateParent {
        path: path.to_path_buf(),
        source,
    })?;
    let payload = serde_json::to_vec_pretty(history)
        .map_err(|source| HistoryStoreError::Serialise { source })?;
    fs::write(path, &payload).map_err(|source| HistoryStoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("saved {} recent beaches to {path}", history.len());
    Ok(())
}
