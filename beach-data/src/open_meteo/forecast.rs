//! Open-Meteo forecast API response types.
//!
//! Only the fields the beach views use are modelled; unknown fields are
//! ignored. Series values are `null` when the model has no data for a slot,
//! so every series element is optional.
//!
//! See: <https://open-meteo.com/en/docs>

use serde::Deserialize;

/// Forecast API response for a single coordinate.
///
/// On failure the API returns `{"error": true, "reason": "..."}` and none
/// of the data blocks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastResponse {
    /// Set when the API rejected the request.
    #[serde(default)]
    pub error: bool,
    /// Error description accompanying `error`.
    pub reason: Option<String>,
    /// Latitude the model grid snapped to.
    pub latitude: Option<f64>,
    /// Longitude the model grid snapped to.
    pub longitude: Option<f64>,
    /// IANA timezone used for local timestamps.
    pub timezone: Option<String>,
    /// Conditions at the current time step.
    pub current: Option<CurrentWeather>,
    /// Hourly series.
    pub hourly: Option<HourlyWeather>,
    /// Daily aggregates.
    pub daily: Option<DailyWeather>,
}

impl ForecastResponse {
    /// Check if the response carries data rather than an error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.error
    }
}

/// The `current` block of a forecast response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// Local ISO 8601 timestamp, e.g. `2024-07-01T14:00`.
    pub time: Option<String>,
    /// Air temperature at 2 m in °C.
    pub temperature_2m: Option<f64>,
    /// Relative humidity at 2 m in percent.
    pub relative_humidity_2m: Option<f64>,
    /// WMO weather code.
    pub weather_code: Option<i32>,
    /// Wind speed at 10 m in km/h.
    pub wind_speed_10m: Option<f64>,
    /// Wind bearing at 10 m in degrees.
    pub wind_direction_10m: Option<f64>,
    /// Gust speed at 10 m in km/h.
    pub wind_gusts_10m: Option<f64>,
    /// UV index.
    pub uv_index: Option<f64>,
}

/// The `hourly` block of a forecast response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourlyWeather {
    /// Local timestamps, one per slot.
    #[serde(default)]
    pub time: Vec<String>,
    /// Air temperature at 2 m in °C.
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    /// WMO weather code.
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    /// Wind speed at 10 m in km/h.
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    /// Wind bearing at 10 m in degrees.
    #[serde(default)]
    pub wind_direction_10m: Vec<Option<f64>>,
    /// UV index.
    #[serde(default)]
    pub uv_index: Vec<Option<f64>>,
    /// Precipitation probability in percent.
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
}

/// The `daily` block of a forecast response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyWeather {
    /// Local dates, e.g. `2024-07-01`.
    #[serde(default)]
    pub time: Vec<String>,
    /// Dominant WMO weather code for the day.
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    /// Maximum air temperature in °C.
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Minimum air temperature in °C.
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    /// Maximum UV index.
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
    /// Maximum wind speed at 10 m in km/h.
    #[serde(default)]
    pub wind_speed_10m_max: Vec<Option<f64>>,
    /// Local sunrise timestamps.
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
    /// Local sunset timestamps.
    #[serde(default)]
    pub sunset: Vec<Option<String>>,
    /// Total precipitation in mm.
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}
