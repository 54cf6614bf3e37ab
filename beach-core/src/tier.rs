//! Colour bands used when presenting a beach score.

/// Score from which conditions are considered ideal.
const IDEAL_FROM: f64 = 4.0;
/// Score from which conditions are considered fair.
const FAIR_FROM: f64 = 2.5;

/// Presentation band for a normalised score.
///
/// # Examples
/// ```
/// use beach_core::ScoreTier;
///
/// assert_eq!(ScoreTier::from_score(4.0), ScoreTier::Ideal);
/// assert_eq!(ScoreTier::from_score(2.5).hex_colour(), "#eab308");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreTier {
    /// Good for swimming.
    Ideal,
    /// Acceptable, with some wind or waves.
    Fair,
    /// Difficult conditions.
    Poor,
}

impl ScoreTier {
    /// Select the band for a raw score.
    #[must_use]
    pub fn from_score(raw: f64) -> Self {
        if raw >= IDEAL_FROM {
            Self::Ideal
        } else if raw >= FAIR_FROM {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// CSS hex colour for the score badge.
    #[must_use]
    pub const fn hex_colour(self) -> &'static str {
        match self {
            Self::Ideal => "#22c55e",
            Self::Fair => "#eab308",
            Self::Poor => "#ef4444",
        }
    }

    /// Short advice line shown under the score.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal conditions for a swim! 🏊",
            Self::Fair => "Good, but watch the wind and waves. 🏄",
            Self::Poor => "Difficult conditions. Take care! ⚠️",
        }
    }
}
