//! Qualitative sea-state buckets for swimming suitability.
//!
//! # Examples
//! ```
//! use beach_core::SeaState;
//!
//! assert_eq!(SeaState::from_wave_height(0.4), SeaState::Calm);
//! assert_eq!(SeaState::from_wind_speed(28.0), SeaState::Rough);
//! assert_eq!(SeaState::Choppy.css_class(), "sea-choppy");
//! ```

/// Wave height at or above which the sea is no longer calm.
const WAVE_CHOPPY_M: f64 = 0.5;
/// Wave height at or above which the sea is rough.
const WAVE_ROUGH_M: f64 = 1.2;
/// Wind speed at or above which the sea is no longer calm.
const WIND_CHOPPY_KMH: f64 = 15.0;
/// Wind speed at or above which the sea is rough.
const WIND_ROUGH_KMH: f64 = 28.0;

/// Surface condition of the sea, ordered from calmest to roughest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SeaState {
    /// Flat or gently rippled water.
    Calm,
    /// Moderate chop; swimming needs some care.
    Choppy,
    /// Rough water; swimming is discouraged.
    Rough,
}

impl SeaState {
    /// Classify the sea from a significant wave height in metres.
    #[must_use]
    pub fn from_wave_height(metres: f64) -> Self {
        if metres >= WAVE_ROUGH_M {
            Self::Rough
        } else if metres >= WAVE_CHOPPY_M {
            Self::Choppy
        } else {
            Self::Calm
        }
    }

    /// Classify the sea from wind speed in km/h when no wave data exists.
    #[must_use]
    pub fn from_wind_speed(kmh: f64) -> Self {
        if kmh >= WIND_ROUGH_KMH {
            Self::Rough
        } else if kmh >= WIND_CHOPPY_KMH {
            Self::Choppy
        } else {
            Self::Calm
        }
    }

    /// Human-facing description shown next to a score.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "Calm 🌊",
            Self::Choppy => "Choppy 〰️",
            Self::Rough => "Rough 🌊💨",
        }
    }

    /// Style hook used by presentation layers.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Calm => "sea-calm",
            Self::Choppy => "sea-choppy",
            Self::Rough => "sea-rough",
        }
    }
}

impl std::fmt::Display for SeaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, SeaState::Calm)]
    #[case(0.49, SeaState::Calm)]
    #[case(0.5, SeaState::Choppy)]
    #[case(1.19, SeaState::Choppy)]
    #[case(1.2, SeaState::Rough)]
    #[case(4.0, SeaState::Rough)]
    fn classifies_wave_height(#[case] metres: f64, #[case] expected: SeaState) {
        assert_eq!(SeaState::from_wave_height(metres), expected);
    }

    #[rstest]
    #[case(0.0, SeaState::Calm)]
    #[case(14.9, SeaState::Calm)]
    #[case(15.0, SeaState::Choppy)]
    #[case(27.9, SeaState::Choppy)]
    #[case(28.0, SeaState::Rough)]
    fn classifies_wind_speed(#[case] kmh: f64, #[case] expected: SeaState) {
        assert_eq!(SeaState::from_wind_speed(kmh), expected);
    }

    #[rstest]
    fn labels_are_distinct() {
        let labels = [SeaState::Calm, SeaState::Choppy, SeaState::Rough].map(SeaState::label);
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }
}
