//! Look up beaches by name.
//!
//! The `PlaceSearchProvider` trait abstracts whichever places or geocoding
//! service resolves a free-text query into candidate beaches. Scoring never
//! depends on it; callers use a provider to obtain coordinates, fetch
//! conditions for them, and only then build a
//! [`WeatherReading`](crate::WeatherReading).

use thiserror::Error;

/// A beach or region returned by a place search.
///
/// # Examples
///
/// ```
/// use beach_core::Place;
///
/// # fn main() -> Result<(), beach_core::PlaceError> {
/// let place = Place::new("cala-goloritze", "Cala Goloritzé", "Sardinia, Italy", 40.11, 9.69)?;
/// assert_eq!(place.name, "Cala Goloritzé");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Provider-specific identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable locality, e.g. region and country.
    pub location: String,
    /// Latitude in degrees, `-90..=90`.
    pub latitude: f64,
    /// Longitude in degrees, `-180..=180`.
    pub longitude: f64,
}

/// Errors returned by [`Place::new`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceError {
    /// The identifier was empty or whitespace.
    #[error("place id must not be empty")]
    EmptyId,
    /// The coordinates were not finite or out of range.
    #[error("coordinates ({latitude}, {longitude}) are outside the valid range")]
    InvalidCoordinates {
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
    },
}

impl Place {
    /// Validates and constructs a [`Place`].
    ///
    /// # Errors
    /// Returns [`PlaceError::EmptyId`] for a blank identifier and
    /// [`PlaceError::InvalidCoordinates`] when either coordinate is
    /// non-finite or out of range.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, PlaceError> {
        let identifier: String = id.into();
        if identifier.trim().is_empty() {
            return Err(PlaceError::EmptyId);
        }
        if !((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)) {
            return Err(PlaceError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            id: identifier,
            name: name.into(),
            location: location.into(),
            latitude,
            longitude,
        })
    }
}

/// Errors from [`PlaceSearchProvider::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceSearchError {
    /// The query was empty or whitespace.
    ///
    /// Callers should not issue a search until the user has typed something.
    #[error("search query must not be empty")]
    EmptyQuery,
    /// The backing service failed or returned an unusable response.
    #[error("place search unavailable: {message}")]
    Unavailable {
        /// Provider-supplied description of the failure.
        message: String,
    },
}

/// Resolve a free-text query into candidate places.
///
/// # Examples
///
/// ```rust
/// use beach_core::{Place, PlaceSearchError, PlaceSearchProvider};
///
/// struct NoResults;
///
/// impl PlaceSearchProvider for NoResults {
///     fn search(&self, query: &str) -> Result<Vec<Place>, PlaceSearchError> {
///         if query.trim().is_empty() {
///             return Err(PlaceSearchError::EmptyQuery);
///         }
///         Ok(Vec::new())
///     }
/// }
///
/// assert!(NoResults.search("tropea")?.is_empty());
/// # Ok::<(), PlaceSearchError>(())
/// ```
pub trait PlaceSearchProvider {
    /// Return places matching `query`, best match first.
    ///
    /// Implementations must return `Err(PlaceSearchError::EmptyQuery)` when
    /// `query` is blank.
    fn search(&self, query: &str) -> Result<Vec<Place>, PlaceSearchError>;
}
