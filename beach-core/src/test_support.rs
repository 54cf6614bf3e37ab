//! Test-only, in-memory collaborators used by unit and behaviour tests.

use crate::{Place, PlaceSearchError, PlaceSearchProvider};

/// In-memory `PlaceSearchProvider` matching on name or location.
///
/// Matching is a case-insensitive substring test performed by linear scan,
/// so the provider is intended only for small catalogues.
#[derive(Default, Debug, Clone)]
pub struct StaticPlaceSearchProvider {
    places: Vec<Place>,
}

impl StaticPlaceSearchProvider {
    /// Create a provider from a collection of places.
    #[must_use]
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceSearchProvider for StaticPlaceSearchProvider {
    fn search(&self, query: &str) -> Result<Vec<Place>, PlaceSearchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(PlaceSearchError::EmptyQuery);
        }
        Ok(self
            .places
            .iter()
            .filter(|place| {
                place.name.to_lowercase().contains(&needle)
                    || place.location.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
