//! Rarity tiers.
//!
//! The set of tiers is closed. Anything the upstream API reports that is not
//! one of the four known tiers (or nothing at all) is treated as `Common`.

use serde::{Deserialize, Serialize};

/// Rarity tier of a card, in ascending order of scarcity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers, common first.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Strictly parse a tier name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Parse a tier name, falling back to `Common` for anything unknown.
    #[must_use]
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!(rarity = s, "unknown rarity, treating as common");
            Rarity::Common
        })
    }

    /// Sort rank: common=0, rare=1, epic=2, legendary=3.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lower-case tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
