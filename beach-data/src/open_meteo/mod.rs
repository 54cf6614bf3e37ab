//! Typed Open-Meteo payloads.
//!
//! The forecast and marine services are queried separately and merged in
//! [`ConditionsSnapshot`](crate::ConditionsSnapshot).

mod forecast;
mod marine;

pub use forecast::{CurrentWeather, DailyWeather, ForecastResponse, HourlyWeather};
pub use marine::{CurrentMarine, HourlyMarine, MarineResponse};
