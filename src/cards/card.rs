//! Owned-collection card records.
//!
//! A `Card` is what the player API reports for one card in a collection,
//! after normalization. Progress is derived on demand and never stored.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// One card in a player's collection.
///
/// ## Example
///
/// ```
/// use lonorix::cards::{Card, Rarity};
///
/// let giant = Card::new("Giant", 9, 11, Rarity::Rare);
/// assert!(!giant.is_maxed());
/// assert!((giant.progress() - 81.818).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CardRecord")]
pub struct Card {
    /// Display name. Matching against it is case-insensitive.
    pub name: String,

    /// Current level.
    pub level: u32,

    /// Highest level reachable for this card's tier.
    pub max_level: u32,

    /// Rarity tier. Missing, null or unknown values deserialize as `Common`.
    pub rarity: Rarity,
}

/// Card as reported upstream, before normalization.
///
/// Every field is optional; `From<CardRecord> for Card` goes through
/// `Card::new` so deserialized cards get the same clamping.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRecord {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub rarity: Option<String>,
}

impl From<CardRecord> for Card {
    fn from(raw: CardRecord) -> Self {
        let rarity = raw.rarity.as_deref().map_or(Rarity::Common, Rarity::normalize);
        Card::new(raw.name, raw.level, raw.max_level, rarity)
    }
}

impl Card {
    /// Create a new card record.
    ///
    /// `max_level` is raised to 1 if given as 0 so the progress ratio is
    /// always defined.
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32, max_level: u32, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            level,
            max_level: max_level.max(1),
            rarity,
        }
    }

    /// `level / max_level` as a fraction. May exceed 1.0 for malformed data.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.level) / f64::from(self.max_level.max(1))
    }

    /// Progress as a percentage.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress_ratio() * 100.0
    }

    /// True when the card sits exactly at its max level.
    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.level == self.max_level
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}
