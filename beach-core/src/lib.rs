//! Core domain types for the beach conditions engine.
//!
//! The crate scores a normalised weather/marine [`WeatherReading`] on a
//! `1.0..=5.0` suitability scale and provides the small presentation helpers
//! that travel with a score: sea-state labels, colour tiers, weather-code
//! labels, compass points, and marine summaries. It performs no I/O.
//!
//! # Examples
//!
//! ```
//! use beach_core::{SeaState, WeatherReading, score};
//!
//! # fn main() -> Result<(), beach_core::WeatherReadingError> {
//! let reading = WeatherReading::new(0, 28.0, 8.0)?.with_wave_height(0.2);
//! let result = score(&reading);
//! assert_eq!(result.display_score, "5,0");
//! assert_eq!(result.sea_state, SeaState::Calm);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod compass;
pub mod history;
pub mod marine;
pub mod place;
pub mod reading;
pub mod scorer;
pub mod sea_state;
pub mod sky;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tier;

pub use compass::CompassPoint;
pub use history::{RECENT_CAPACITY, RecentBeaches, RecentVisit};
pub use marine::MarineSummary;
pub use place::{Place, PlaceError, PlaceSearchError, PlaceSearchProvider};
pub use reading::{WeatherReading, WeatherReadingError};
pub use scorer::{
    ConditionScorer, MAX_SCORE, MIN_SCORE, ScoreResult, SubScores, ThresholdScorer,
    format_score, score,
};
pub use sea_state::SeaState;
pub use sky::{SkyCondition, weather_icon, weather_label};
pub use tier::ScoreTier;
