//! Sky condition categories and display labels for WMO weather codes.
//!
//! # Examples
//! ```
//! use beach_core::{SkyCondition, weather_icon, weather_label};
//!
//! assert_eq!(SkyCondition::from_code(97), SkyCondition::Thunderstorm);
//! assert_eq!(weather_label(61), "Rain");
//! assert_eq!(weather_label(80), "Variable");
//! assert_eq!(weather_icon(2), "⛅");
//! ```

/// Broad sky category for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkyCondition {
    /// Code 0.
    Clear,
    /// Codes 1 and 2.
    PartlyCloudy,
    /// Code 3.
    Overcast,
    /// Codes 45 and 48.
    Fog,
    /// Codes 51 to 94: drizzle, rain, snow and showers.
    Rain,
    /// Codes 95 and above.
    Thunderstorm,
    /// Anything else.
    Variable,
}

impl SkyCondition {
    /// Classify a WMO code. Unknown codes are [`SkyCondition::Variable`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51..=94 => Self::Rain,
            95.. => Self::Thunderstorm,
            _ => Self::Variable,
        }
    }
}

/// Weather glyph for compact day summaries.
///
/// Only code 61 shows rain. Codes below 3 other than 0 show sun behind
/// cloud, and everything else is a cloud.
#[must_use]
pub const fn weather_icon(code: i32) -> &'static str {
    match code {
        61 => "🌧️",
        0 => "☀️",
        i32::MIN..=-1 | 1..=2 => "⛅",
        _ => "☁️",
    }
}

/// Label for an exact weather code, or `"Variable"` when unlisted.
#[must_use]
pub const fn weather_label(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Rime fog",
        51 => "Drizzle",
        61 => "Rain",
        71 => "Snow",
        95 => "Thunderstorm",
        _ => "Variable",
    }
}
