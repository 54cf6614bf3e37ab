//! Data boundary for beach-condition scoring.
//!
//! Deserialises Open-Meteo forecast and marine payloads, normalises them
//! into [`beach_core::WeatherReading`] values, and persists the
//! recent-beach history as JSON.
//!
//! ```no_run
//! use beach_core::score;
//! use beach_data::load_snapshot;
//! use camino::Utf8Path;
//!
//! let snapshot = load_snapshot(
//!     Utf8Path::new("forecast.json"),
//!     Some(Utf8Path::new("marine.json")),
//! )?;
//! let result = score(&snapshot.current_reading()?);
//! println!("{}", result.display_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod fs;
mod history_store;
pub mod open_meteo;
mod snapshot;

pub use error::{HistoryStoreError, NormaliseError, SnapshotError};
pub use history_store::{load_catalogue, load_history, load_history_refreshed, save_history};
pub use snapshot::{ConditionsSnapshot, DailyOutlook, load_snapshot};
