//! Recently viewed beaches.
//!
//! [`RecentBeaches`] is an immutable, most-recent-first list. Updates consume
//! the current snapshot and return the next one, so callers can treat it as
//! reducer state and persist whichever snapshot they hold.

/// Maximum number of beaches kept in the history.
pub const RECENT_CAPACITY: usize = 10;

/// A beach the user opened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecentVisit {
    /// Identifier of the beach; entries are unique by id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable locality.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    /// Preview image URL, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preview: Option<String>,
}

/// Bounded most-recent-first history of visited beaches.
///
/// # Examples
/// ```
/// use beach_core::{RecentBeaches, RecentVisit};
///
/// let visit = |id: &str| RecentVisit {
///     id: id.into(),
///     name: id.to_uppercase(),
///     location: String::new(),
///     preview: None,
/// };
/// let history = RecentBeaches::default()
///     .record(visit("a"))
///     .record(visit("b"))
///     .record(visit("a"));
/// let ids: Vec<_> = history.iter().map(|v| v.id.as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecentBeaches {
    visits: Vec<RecentVisit>,
}

impl RecentBeaches {
    /// Build a history from stored visits, dropping duplicate ids and
    /// anything beyond [`RECENT_CAPACITY`].
    #[must_use]
    pub fn from_visits<I>(visits: I) -> Self
    where
        I: IntoIterator<Item = RecentVisit>,
    {
        let mut kept: Vec<RecentVisit> = Vec::with_capacity(RECENT_CAPACITY);
        for visit in visits {
            if kept.len() == RECENT_CAPACITY {
                break;
            }
            if kept.iter().all(|existing| existing.id != visit.id) {
                kept.push(visit);
            }
        }
        Self { visits: kept }
    }

    /// Record a visit: move it to the front, replacing any entry with the
    /// same id, and keep at most [`RECENT_CAPACITY`] entries.
    #[must_use]
    pub fn record(self, visit: RecentVisit) -> Self {
        let id = visit.id.clone();
        let rest = self
            .visits
            .into_iter()
            .filter(move |existing| existing.id != id);
        Self::from_visits(std::iter::once(visit).chain(rest))
    }

    /// Replace name, location and preview with fresher catalogue data for
    /// every entry whose id appears in `catalogue`.
    #[must_use]
    pub fn refresh_from(self, catalogue: &[RecentVisit]) -> Self {
        let visits = self
            .visits
            .into_iter()
            .map(|stored| {
                catalogue
                    .iter()
                    .find(|fresh| fresh.id == stored.id)
                    .cloned()
                    .unwrap_or(stored)
            })
            .collect();
        Self { visits }
    }

    /// Iterate visits, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &RecentVisit> {
        self.visits.iter()
    }

    /// Number of stored visits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.visits.len()
    }

    /// Report whether the history is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Most recent visit, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&RecentVisit> {
        self.visits.first()
    }
}
