//! Filter and sort criteria for the collection view.
//!
//! `FilterCriteria` is a plain value rebuilt by the caller from the current
//! control values on every recompute. It has no identity of its own.

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

/// Which rarity tiers pass the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityFilter {
    /// Every tier passes.
    #[default]
    All,
    /// Only this tier passes.
    Only(Rarity),
}

impl RarityFilter {
    /// Check whether a tier passes.
    #[must_use]
    pub fn admits(self, rarity: Rarity) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Only(wanted) => wanted == rarity,
        }
    }
}

impl std::str::FromStr for RarityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RarityFilter::All);
        }
        Rarity::parse(s)
            .map(RarityFilter::Only)
            .ok_or_else(|| format!("unknown rarity filter: {s}"))
    }
}

/// Ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive name order.
    Name,
    /// Highest level first.
    Level,
    /// Legendary first.
    Rarity,
    /// Furthest from max level first.
    #[default]
    Progress,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "level" => Ok(SortKey::Level),
            "rarity" => Ok(SortKey::Rarity),
            "progress" => Ok(SortKey::Progress),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Filter/sort criteria for `select_and_order`.
///
/// The default admits every card and sorts by progress, which is what the
/// upgrade list uses.
///
/// ## Example
///
/// ```
/// use lonorix::cards::Rarity;
/// use lonorix::collection::{FilterCriteria, SortKey};
///
/// let criteria = FilterCriteria::default()
///     .with_search("knight")
///     .with_rarity(Rarity::Common)
///     .with_min_level(5)
///     .hide_maxed()
///     .sorted_by(SortKey::Level);
///
/// assert!(!criteria.show_maxed);
/// assert_eq!(criteria.min_level, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring to look for in card names.
    pub search_term: String,

    /// Tier restriction.
    pub rarity_filter: RarityFilter,

    /// Minimum level a card must have.
    pub min_level: u32,

    /// When false, cards at their max level are excluded.
    pub show_maxed: bool,

    /// Ordering of the result.
    pub sort_key: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            rarity_filter: RarityFilter::All,
            min_level: 1,
            show_maxed: true,
            sort_key: SortKey::Progress,
        }
    }
}

impl FilterCriteria {
    /// Set the search term (builder pattern).
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to a single tier (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity_filter = RarityFilter::Only(rarity);
        self
    }

    /// Set the tier filter directly (builder pattern).
    #[must_use]
    pub fn with_rarity_filter(mut self, filter: RarityFilter) -> Self {
        self.rarity_filter = filter;
        self
    }

    /// Set the minimum level (builder pattern). Values below 1 become 1.
    #[must_use]
    pub fn with_min_level(mut self, level: u32) -> Self {
        self.min_level = level.max(1);
        self
    }

    /// Exclude maxed cards (builder pattern).
    #[must_use]
    pub fn hide_maxed(mut self) -> Self {
        self.show_maxed = false;
        self
    }

    /// Set the sort key (builder pattern).
    #[must_use]
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// True when no card can be filtered out by these criteria.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty()
            && self.rarity_filter == RarityFilter::All
            && self.min_level <= 1
            && self.show_maxed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.sort_key, SortKey::Progress);
        assert_eq!(criteria.min_level, 1);
    }

    #[test]
    fn test_builder() {
        let criteria = FilterCriteria::default()
            .with_search("wiz")
            .with_rarity(Rarity::Epic)
            .with_min_level(0)
            .sorted_by(SortKey::Name);

        assert_eq!(criteria.search_term, "wiz");
        assert_eq!(criteria.rarity_filter, RarityFilter::Only(Rarity::Epic));
        assert_eq!(criteria.min_level, 1);
        assert_eq!(criteria.sort_key, SortKey::Name);
        assert!(!criteria.is_unrestricted());
    }

    #[test]
    fn test_rarity_filter_admits() {
        assert!(RarityFilter::All.admits(Rarity::Legendary));
        assert!(RarityFilter::Only(Rarity::Rare).admits(Rarity::Rare));
        assert!(!RarityFilter::Only(Rarity::Rare).admits(Rarity::Epic));
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("all".parse::<RarityFilter>(), Ok(RarityFilter::All));
        assert_eq!(
            "Legendary".parse::<RarityFilter>(),
            Ok(RarityFilter::Only(Rarity::Legendary))
        );
        assert!("mythic".parse::<RarityFilter>().is_err());

        assert_eq!("LEVEL".parse::<SortKey>(), Ok(SortKey::Level));
        assert!("elixir".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_serialization() {
        let criteria = FilterCriteria::default().with_rarity(Rarity::Epic).hide_maxed();
        let json = serde_json::to_string(&criteria).unwrap();
        let deserialized: FilterCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(criteria, deserialized);
    }
}
