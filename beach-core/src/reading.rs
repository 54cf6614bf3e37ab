//! Normalised weather and marine readings consumed by the scorer.
//!
//! A [`WeatherReading`] is built per beach per request from data that has
//! already been fetched and parsed. The required fields must be finite; the
//! optional marine and UV fields may be absent.

use thiserror::Error;

/// A single normalised observation for one beach.
///
/// # Examples
///
/// ```
/// use beach_core::WeatherReading;
///
/// # fn main() -> Result<(), beach_core::WeatherReadingError> {
/// let reading = WeatherReading::new(3, 18.0, 22.0)?;
/// assert!(reading.wave_height_m.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherReading {
    /// WMO-style sky condition code.
    pub weather_code: i32,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Wind speed at 10 m in km/h.
    pub wind_speed_kmh: f64,
    /// Significant wave height in metres, absent inland or without marine data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wave_height_m: Option<f64>,
    /// Wave period in seconds. Informational only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wave_period_s: Option<f64>,
    /// UV index. Informational only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uv_index: Option<f64>,
}

/// Errors returned by [`WeatherReading::new`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WeatherReadingError {
    /// The temperature was NaN or infinite.
    #[error("temperature must be finite, got {0}")]
    NonFiniteTemperature(f64),
    /// The wind speed was NaN or infinite.
    #[error("wind speed must be finite, got {0}")]
    NonFiniteWindSpeed(f64),
}

impl WeatherReading {
    /// Validates and constructs a [`WeatherReading`] without marine data.
    ///
    /// # Errors
    /// Returns [`WeatherReadingError`] when the temperature or wind speed is
    /// not finite.
    pub fn new(
        weather_code: i32,
        temperature_c: f64,
        wind_speed_kmh: f64,
    ) -> Result<Self, WeatherReadingError> {
        if !temperature_c.is_finite() {
            return Err(WeatherReadingError::NonFiniteTemperature(temperature_c));
        }
        if !wind_speed_kmh.is_finite() {
            return Err(WeatherReadingError::NonFiniteWindSpeed(wind_speed_kmh));
        }
        Ok(Self {
            weather_code,
            temperature_c,
            wind_speed_kmh,
            wave_height_m: None,
            wave_period_s: None,
            uv_index: None,
        })
    }

    /// Attach a wave height. Non-finite values leave the field absent.
    #[must_use]
    pub fn with_wave_height(mut self, metres: f64) -> Self {
        self.wave_height_m = finite(metres);
        self
    }

    /// Attach a wave period. Non-finite values leave the field absent.
    #[must_use]
    pub fn with_wave_period(mut self, seconds: f64) -> Self {
        self.wave_period_s = finite(seconds);
        self
    }

    /// Attach a UV index. Non-finite values leave the field absent.
    #[must_use]
    pub fn with_uv_index(mut self, index: f64) -> Self {
        self.uv_index = finite(index);
        self
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
