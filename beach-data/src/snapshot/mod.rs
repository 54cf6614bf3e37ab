//! Merge forecast and marine payloads and normalise them into readings.

use beach_core::{CompassPoint, WeatherReading};
use camino::Utf8Path;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{NormaliseError, SnapshotError};
use crate::fs::read_to_string;
use crate::open_meteo::{
    CurrentMarine, CurrentWeather, DailyWeather, ForecastResponse, MarineResponse,
};

/// Forecast and marine responses fetched for the same beach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionsSnapshot {
    /// Forecast payload.
    pub forecast: ForecastResponse,
    /// Marine payload, absent inland or when the marine service failed.
    pub marine: Option<MarineResponse>,
}

/// A forecast day with the reading used to score it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOutlook {
    /// Local date, e.g. `2024-07-01`.
    pub date: String,
    /// Dominant WMO weather code.
    pub weather_code: i32,
    /// Minimum air temperature in °C, if reported.
    pub temperature_min_c: Option<f64>,
    /// Maximum air temperature in °C.
    pub temperature_max_c: f64,
    /// Maximum wind speed in km/h.
    pub wind_speed_max_kmh: f64,
    /// Maximum UV index, if reported.
    pub uv_index_max: Option<f64>,
    /// Highest hourly wave height on this date, if marine data exists.
    pub wave_height_max_m: Option<f64>,
    /// Precipitation total in mm, if reported.
    pub precipitation_sum_mm: Option<f64>,
    /// Local sunrise time, e.g. `06:02`.
    pub sunrise: Option<String>,
    /// Local sunset time.
    pub sunset: Option<String>,
    /// Reading built from the day's maxima.
    pub reading: WeatherReading,
}

impl ConditionsSnapshot {
    /// Merge a forecast with an optional marine response.
    ///
    /// Marine error bodies (typical for inland coordinates) are dropped so
    /// the sea state falls back to wind.
    #[must_use]
    pub fn new(forecast: ForecastResponse, marine: Option<MarineResponse>) -> Self {
        Self {
            forecast,
            marine: marine.filter(|response| {
                if !response.is_ok() {
                    warn!(
                        "discarding marine data: {}",
                        response.reason.as_deref().unwrap_or("unknown reason")
                    );
                }
                response.is_ok()
            }),
        }
    }

    /// Build the reading for the current time step.
    ///
    /// # Errors
    /// Returns [`NormaliseError`] when the forecast is an error body, lacks a
    /// `current` block, or is missing a value the scorer requires.
    pub fn current_reading(&self) -> Result<WeatherReading, NormaliseError> {
        if !self.forecast.is_ok() {
            return Err(NormaliseError::Provider {
                reason: self
                    .forecast
                    .reason
                    .clone()
                    .unwrap_or_else(|| "unspecified".to_owned()),
            });
        }
        let current = self
            .forecast
            .current
            .as_ref()
            .ok_or(NormaliseError::MissingCurrent)?;
        let base = required_reading(current)?;
        let with_uv = current.uv_index.map_or(base, |uv| base.with_uv_index(uv));
        Ok(attach_current_marine(with_uv, self.current_marine()))
    }

    /// Compass direction of the current wind, if reported.
    #[must_use]
    pub fn current_wind_direction(&self) -> Option<CompassPoint> {
        self.forecast
            .current
            .as_ref()
            .and_then(|current| current.wind_direction_10m)
            .map(CompassPoint::from_degrees)
    }

    /// Highest hourly wave height whose timestamp falls on `date`.
    #[must_use]
    pub fn max_wave_height_on(&self, date: &str) -> Option<f64> {
        let hourly = self.marine.as_ref()?.hourly.as_ref()?;
        hourly
            .time
            .iter()
            .zip(&hourly.wave_height)
            .filter(|(time, _)| time.starts_with(date))
            .filter_map(|(_, height)| height.filter(|metres| metres.is_finite()))
            .reduce(f64::max)
    }

    /// Build one outlook per forecast day.
    ///
    /// Days missing the weather code, maximum temperature or maximum wind
    /// are skipped with a warning.
    #[must_use]
    pub fn daily_outlooks(&self) -> Vec<DailyOutlook> {
        let Some(daily) = self.forecast.daily.as_ref() else {
            debug!("forecast has no daily block");
            return Vec::new();
        };
        daily
            .time
            .iter()
            .enumerate()
            .filter_map(|(index, date)| {
                let outlook = self.outlook_for(daily, index, date);
                if outlook.is_none() {
                    warn!("skipping forecast day {date}: incomplete daily values");
                }
                outlook
            })
            .collect()
    }

    fn outlook_for(&self, daily: &DailyWeather, index: usize, date: &str) -> Option<DailyOutlook> {
        let weather_code = at(&daily.weather_code, index)?;
        let temperature_max_c = at(&daily.temperature_2m_max, index)?;
        let wind_speed_max_kmh = at(&daily.wind_speed_10m_max, index)?;
        let base = WeatherReading::new(weather_code, temperature_max_c, wind_speed_max_kmh).ok()?;
        let wave_height_max_m = self.max_wave_height_on(date);
        let uv_index_max = at(&daily.uv_index_max, index);
        let with_waves = wave_height_max_m.map_or(base, |metres| base.with_wave_height(metres));
        Some(DailyOutlook {
            date: date.to_owned(),
            weather_code,
            temperature_min_c: at(&daily.temperature_2m_min, index),
            temperature_max_c,
            wind_speed_max_kmh,
            uv_index_max,
            wave_height_max_m,
            precipitation_sum_mm: at(&daily.precipitation_sum, index),
            sunrise: time_of_day(&daily.sunrise, index),
            sunset: time_of_day(&daily.sunset, index),
            reading: uv_index_max.map_or(with_waves, |uv| with_waves.with_uv_index(uv)),
        })
    }

    fn current_marine(&self) -> Option<&CurrentMarine> {
        let current = self.marine.as_ref().and_then(|m| m.current.as_ref());
        if current.is_none() {
            debug!("no current marine data; sea state falls back to wind");
        }
        current
    }
}

fn required_reading(current: &CurrentWeather) -> Result<WeatherReading, NormaliseError> {
    let weather_code = current.weather_code.ok_or(NormaliseError::MissingField {
        field: "weather_code",
    })?;
    let temperature = current.temperature_2m.ok_or(NormaliseError::MissingField {
        field: "temperature_2m",
    })?;
    let wind = current.wind_speed_10m.ok_or(NormaliseError::MissingField {
        field: "wind_speed_10m",
    })?;
    WeatherReading::new(weather_code, temperature, wind)
        .map_err(|source| NormaliseError::InvalidReading { source })
}

fn attach_current_marine(
    base: WeatherReading,
    current: Option<&CurrentMarine>,
) -> WeatherReading {
    current.map_or(base, |marine| {
        let with_height = marine
            .wave_height
            .map_or(base, |metres| base.with_wave_height(metres));
        marine
            .wave_period
            .map_or(with_height, |seconds| with_height.with_wave_period(seconds))
    })
}

fn at<T: Copy>(series: &[Option<T>], index: usize) -> Option<T> {
    series.get(index).copied().flatten()
}

fn time_of_day(series: &[Option<String>], index: usize) -> Option<String> {
    let stamp = series.get(index)?.as_deref()?;
    stamp.split_once('T').map(|(_, time)| time.to_owned())
}

/// Load a forecast payload and an optional marine payload from JSON files.
///
/// # Errors
/// Returns [`SnapshotError`] when a file cannot be read or parsed.
pub fn load_snapshot(
    forecast_path: &Utf8Path,
    marine_path: Option<&Utf8Path>,
) -> Result<ConditionsSnapshot, SnapshotError> {
    let forecast = load_json::<ForecastResponse>(forecast_path)?;
    let marine = marine_path.map(load_json::<MarineResponse>).transpose()?;
    Ok(ConditionsSnapshot::new(forecast, marine))
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, SnapshotError> {
    let payload = read_to_string(path).map_err(|source| SnapshotError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| SnapshotError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}
