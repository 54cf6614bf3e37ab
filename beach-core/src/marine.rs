//! Display strings for the informational marine fields of a reading.

use crate::WeatherReading;

/// Placeholder for missing marine values.
const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for a missing or zero UV index.
const NO_UV: &str = "-";

/// Formatted wave and UV details shown beside a score.
///
/// # Examples
/// ```
/// use beach_core::{MarineSummary, WeatherReading};
///
/// # fn main() -> Result<(), beach_core::WeatherReadingError> {
/// let reading = WeatherReading::new(0, 25.0, 5.0)?
///     .with_wave_height(0.64)
///     .with_wave_period(7.6);
/// let summary = MarineSummary::from_reading(&reading);
/// assert_eq!(summary.wave_height, "0.6 m");
/// assert_eq!(summary.wave_period, "8 s");
/// assert_eq!(summary.uv_index, "-");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarineSummary {
    /// Wave height such as `"0.6 m"`, or `"N/A"`.
    pub wave_height: String,
    /// Wave period such as `"8 s"`, or `"N/A"`.
    pub wave_period: String,
    /// UV index such as `"5.2"`, or `"-"`.
    pub uv_index: String,
}

impl MarineSummary {
    /// Format the optional fields of `reading`.
    ///
    /// A UV index of exactly zero is rendered as missing.
    #[must_use]
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            wave_height: reading
                .wave_height_m
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |m| format!("{:.1} m", to_tenths(m))),
            wave_period: reading
                .wave_period_s
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |s| format!("{:.0} s", s.round())),
            uv_index: reading
                .uv_index
                .filter(|uv| *uv != 0.0)
                .map_or_else(|| NO_UV.to_owned(), |uv| format!("{:.1}", to_tenths(uv))),
        }
    }
}

/// Round to one decimal place with halves going away from zero, so `0.25`
/// displays as `0.3` rather than the ties-to-even `0.2`.
#[expect(
    clippy::float_arithmetic,
    reason = "display rounding scales by ten and back"
)]
fn to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
