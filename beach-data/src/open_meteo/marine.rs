//! Open-Meteo marine API response types.
//!
//! Marine data is only available over water; inland coordinates produce an
//! error response, which callers treat as "no wave data" rather than a
//! failure.

use serde::Deserialize;

/// Marine API response for a single coordinate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarineResponse {
    /// Set when the API rejected the request.
    #[serde(default)]
    pub error: bool,
    /// Error description accompanying `error`.
    pub reason: Option<String>,
    /// Sea state at the current time step.
    pub current: Option<CurrentMarine>,
    /// Hourly wave series.
    pub hourly: Option<HourlyMarine>,
}

impl MarineResponse {
    /// Check if the response carries data rather than an error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.error
    }
}

/// The `current` block of a marine response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentMarine {
    /// Local ISO 8601 timestamp.
    pub time: Option<String>,
    /// Significant wave height in metres.
    pub wave_height: Option<f64>,
    /// Mean wave direction in degrees.
    pub wave_direction: Option<f64>,
    /// Wave period in seconds.
    pub wave_period: Option<f64>,
}

/// The `hourly` block of a marine response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourlyMarine {
    /// Local timestamps, one per slot.
    #[serde(default)]
    pub time: Vec<String>,
    /// Significant wave height in metres.
    #[serde(default)]
    pub wave_height: Vec<Option<f64>>,
    /// Mean wave direction in degrees.
    #[serde(default)]
    pub wave_direction: Vec<Option<f64>>,
    /// Wave period in seconds.
    #[serde(default)]
    pub wave_period: Vec<Option<f64>>,
}
