//! Facade crate for the beach-conditions engine.
//!
//! This crate re-exports the core scoring types and, behind the `data`
//! feature, the Open-Meteo boundary and history persistence.

#![forbid(unsafe_code)]

pub use beach_core::{
    CompassPoint, ConditionScorer, MAX_SCORE, MIN_SCORE, MarineSummary, Place, PlaceError,
    PlaceSearchError, PlaceSearchProvider, RECENT_CAPACITY, RecentBeaches, RecentVisit,
    ScoreResult, ScoreTier, SeaState, SkyCondition, SubScores, ThresholdScorer, WeatherReading,
    WeatherReadingError, format_score, score, weather_icon, weather_label,
};

#[cfg(feature = "data")]
pub use beach_data::{
    ConditionsSnapshot, DailyOutlook, HistoryStoreError, NormaliseError, SnapshotError,
    load_catalogue, load_history, load_history_refreshed, load_snapshot, save_history,
};

#[cfg(feature = "test-support")]
pub use beach_core::test_support;
