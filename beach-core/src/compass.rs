//! Eight-point compass directions for wind bearings.

/// A point on an eight-point compass rose.
///
/// # Examples
/// ```
/// use beach_core::CompassPoint;
///
/// assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::North);
/// assert_eq!(CompassPoint::from_degrees(200.0).as_str(), "S");
/// assert_eq!(CompassPoint::from_degrees(350.0), CompassPoint::North);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    /// 0°.
    North,
    /// 45°.
    NorthEast,
    /// 90°.
    East,
    /// 135°.
    SouthEast,
    /// 180°.
    South,
    /// 225°.
    SouthWest,
    /// 270°.
    West,
    /// 315°.
    NorthWest,
}

const POINTS: [CompassPoint; 8] = [
    CompassPoint::North,
    CompassPoint::NorthEast,
    CompassPoint::East,
    CompassPoint::SouthEast,
    CompassPoint::South,
    CompassPoint::SouthWest,
    CompassPoint::West,
    CompassPoint::NorthWest,
];

impl CompassPoint {
    /// Snap a bearing in degrees to the nearest compass point.
    ///
    /// Bearings outside `0..360` wrap; non-finite bearings map to north.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sector index comes from a wrapped, rounded bearing in 0..=8"
    )]
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::North;
        }
        let sector = (degrees.rem_euclid(360.0) / 45.0).round() as usize;
        POINTS
            .get(sector.rem_euclid(POINTS.len()))
            .copied()
            .unwrap_or(Self::North)
    }

    /// Abbreviation such as `"NE"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
