//! Score beach conditions from a normalised weather reading.
//!
//! Three independent sub-scores are summed and halved, then clamped to
//! [`MIN_SCORE`]`..=`[`MAX_SCORE`]:
//!
//! | Signal | Points |
//! |--------|--------|
//! | Sky (WMO code) | clear +4, partly cloudy +3, overcast +2, rain -1, thunderstorm -2, other 0 |
//! | Sea (waves, else wind) | +3, +2, +1 or -1 by band |
//! | Temperature | 25-32 °C +3, from 20 °C +2, from 15 °C +1, colder -1 |
//!
//! The sea state reported alongside the score is derived from the same
//! source as the sea points (wave height when present, wind otherwise) but
//! uses its own thresholds; see [`SeaState`].

use crate::{ScoreTier, SeaState, WeatherReading};

/// Lowest score the scorer reports.
pub const MIN_SCORE: f64 = 1.0;
/// Highest score the scorer reports.
pub const MAX_SCORE: f64 = 5.0;

/// Compute a suitability score for a beach reading.
///
/// Implementations must be pure: the same reading always yields the same
/// result, and no input may cause a panic. Scores must be finite and lie in
/// `MIN_SCORE..=MAX_SCORE`; use [`ConditionScorer::clamp_score`] to apply
/// that guard.
///
/// # Examples
///
/// ```rust
/// use beach_core::{ConditionScorer, ThresholdScorer, WeatherReading};
///
/// # fn main() -> Result<(), beach_core::WeatherReadingError> {
/// let reading = WeatherReading::new(3, 18.0, 22.0)?;
/// let result = ThresholdScorer.score(&reading);
/// assert_eq!(result.display_score, "2,0");
/// # Ok(())
/// # }
/// ```
pub trait ConditionScorer: Send + Sync {
    /// Return a score for `reading`.
    fn score(&self, reading: &WeatherReading) -> ScoreResult;

    /// Clamp a raw score into the reported range.
    ///
    /// Non-finite values collapse to [`MIN_SCORE`].
    fn clamp_score(raw: f64) -> f64
    where
        Self: Sized,
    {
        if !raw.is_finite() {
            return MIN_SCORE;
        }
        raw.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Points contributed by each signal before normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubScores {
    /// Sky condition points, `-2..=4`.
    pub sky: i32,
    /// Sea or wind points, `-1..=3`.
    pub sea: i32,
    /// Temperature points, `-1..=3`.
    pub temperature: i32,
}

impl SubScores {
    /// Score every signal in `reading`.
    #[must_use]
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            sky: sky_points(reading.weather_code),
            sea: reading
                .wave_height_m
                .map_or_else(|| wind_points(reading.wind_speed_kmh), wave_points),
            temperature: temperature_points(reading.temperature_c),
        }
    }

    /// Sum of the three sub-scores.
    #[must_use]
    pub const fn total(self) -> i32 {
        self.sky + self.sea + self.temperature
    }
}

/// Outcome of scoring a single reading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Normalised score in `1.0..=5.0`.
    pub raw_score: f64,
    /// `raw_score` with one decimal and a comma separator, e.g. `"4,5"`.
    pub display_score: String,
    /// Human-facing sea description.
    pub sea_label: String,
    /// Machine-readable counterpart of `sea_label`.
    pub sea_state: SeaState,
    /// Points contributed by each signal.
    pub breakdown: SubScores,
}

impl ScoreResult {
    /// Colour band for presenting this score.
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.raw_score)
    }
}

/// Threshold-based scorer reproducing the beach score heuristic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdScorer;

impl ConditionScorer for ThresholdScorer {
    fn score(&self, reading: &WeatherReading) -> ScoreResult {
        let breakdown = SubScores::from_reading(reading);
        let raw_score = Self::clamp_score(halve(breakdown.total()));
        let sea_state = reading.wave_height_m.map_or_else(
            || SeaState::from_wind_speed(reading.wind_speed_kmh),
            SeaState::from_wave_height,
        );
        ScoreResult {
            raw_score,
            display_score: format_score(raw_score),
            sea_label: sea_state.label().to_owned(),
            sea_state,
            breakdown,
        }
    }
}

/// Score `reading` with the default [`ThresholdScorer`].
#[must_use]
pub fn score(reading: &WeatherReading) -> ScoreResult {
    ThresholdScorer.score(reading)
}

/// Render a score with one fractional digit and a comma decimal separator.
///
/// # Examples
/// ```
/// assert_eq!(beach_core::format_score(3.5), "3,5");
/// assert_eq!(beach_core::format_score(5.0), "5,0");
/// ```
#[must_use]
pub fn format_score(raw: f64) -> String {
    format!("{raw:.1}").replace('.', ",")
}

#[expect(
    clippy::float_arithmetic,
    reason = "normalisation halves the summed sub-scores"
)]
fn halve(total: i32) -> f64 {
    f64::from(total) / 2.0
}

/// Unknown or unlisted codes (fog, snow, negatives) are neutral.
const fn sky_points(code: i32) -> i32 {
    match code {
        0 => 4,
        1..=2 => 3,
        3 => 2,
        95.. => -2,
        51..=94 => -1,
        _ => 0,
    }
}

fn wave_points(metres: f64) -> i32 {
    if metres < 0.3 {
        3
    } else if metres < 0.8 {
        2
    } else if metres < 1.5 {
        1
    } else {
        -1
    }
}

fn wind_points(kmh: f64) -> i32 {
    if kmh < 10.0 {
        3
    } else if kmh < 20.0 {
        2
    } else if kmh < 30.0 {
        1
    } else {
        -1
    }
}

fn temperature_points(celsius: f64) -> i32 {
    if (25.0..=32.0).contains(&celsius) {
        3
    } else if celsius >= 20.0 {
        2
    } else if celsius >= 15.0 {
        1
    } else {
        -1
    }
}
