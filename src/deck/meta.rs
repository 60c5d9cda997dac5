//! Static deck data: curated meta decks and the popular-card pool used by
//! the randomizer.

use serde::Serialize;

use super::metrics::average_elixir;
use super::slots::{DeckSlots, DECK_SIZE};

/// A curated deck from the meta library.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDeck {
    pub name: &'static str,
    pub cards: [&'static str; DECK_SIZE],
    pub rating: f32,
    pub win_rate: u8,
}

impl MetaDeck {
    /// Load this deck into fresh slots.
    #[must_use]
    pub fn to_slots(&self) -> DeckSlots {
        DeckSlots::from_names(self.cards)
    }

    #[must_use]
    pub fn average_elixir(&self) -> f64 {
        average_elixir(&self.cards)
    }
}

pub static META_DECKS: [MetaDeck; 4] = [
    MetaDeck {
        name: "Hog Cycle",
        cards: [
            "Hog Rider", "Fireball", "Musketeer", "Ice Spirit", "Cannon", "Log", "Skeletons", "Ice Golem",
        ],
        rating: 4.8,
        win_rate: 67,
    },
    MetaDeck {
        name: "Giant Beatdown",
        cards: [
            "Giant", "Wizard", "Mega Minion", "Zap", "Arrows", "Knight", "Archers", "Musketeer",
        ],
        rating: 4.6,
        win_rate: 64,
    },
    MetaDeck {
        name: "Lava Loon",
        cards: [
            "Balloon", "Lava Hound", "Mega Minion", "Zap", "Arrows", "Knight", "Archers", "Musketeer",
        ],
        rating: 4.7,
        win_rate: 65,
    },
    MetaDeck {
        name: "Golem Night Witch",
        cards: [
            "Golem", "Mega Minion", "Zap", "Lightning", "Night Witch", "Baby Dragon", "Lumber Jack", "Tornado",
        ],
        rating: 4.5,
        win_rate: 62,
    },
];

/// Cards the randomizer draws from.
pub const POPULAR_CARDS: [&str; 38] = [
    "Hog Rider", "Fireball", "Musketeer", "Ice Spirit", "Cannon", "Log", "Skeletons", "Ice Golem",
    "Giant", "Wizard", "Mega Minion", "Zap", "Arrows", "Knight", "Archers", "Goblin Barrel",
    "Princess", "Miner", "Balloon", "Lava Hound", "Golem", "P.E.K.K.A", "Electro Wizard", "Bandit",
    "Royal Giant", "Elite Barbarians", "Sparky", "Inferno Dragon", "Lumberjack", "Ice Wizard",
    "Graveyard", "Tornado", "Clone", "Rage", "Freeze", "Mirror", "Poison", "Lightning",
];

/// Cards offered for quick add, grouped by role.
pub static CARD_CATEGORIES: [(&str, &[&str]); 6] = [
    (
        "Win Conditions",
        &["Hog Rider", "Giant", "Royal Giant", "Balloon", "Miner", "Graveyard"],
    ),
    (
        "Spells",
        &["Fireball", "Zap", "Arrows", "Log", "Lightning", "Poison", "Freeze", "Rage"],
    ),
    (
        "Defense",
        &["Cannon", "Inferno Tower", "Tesla", "Bomb Tower", "X-Bow", "Mortar"],
    ),
    (
        "Support",
        &["Musketeer", "Wizard", "Ice Wizard", "Electro Wizard", "Princess", "Archers"],
    ),
    (
        "Tanks",
        &["Golem", "Lava Hound", "P.E.K.K.A", "Mega Knight", "Giant Skeleton"],
    ),
    (
        "Swarm",
        &["Skeletons", "Goblins", "Minions", "Bats", "Skeleton Army"],
    ),
];

/// Cards in a quick-add category (case-insensitive name).
#[must_use]
pub fn category_cards(category: &str) -> Option<&'static [&'static str]> {
    let category = category.trim();
    CARD_CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|&(_, cards)| cards)
}

/// Find a meta deck by name (case-insensitive).
#[must_use]
pub fn find_meta_deck(name: &str) -> Option<&'static MetaDeck> {
    let name = name.trim();
    META_DECKS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_decks_are_complete() {
        for deck in &META_DECKS {
            assert!(deck.to_slots().readiness().is_ready(), "{} incomplete", deck.name);
        }
    }

    #[test]
    fn test_find_meta_deck() {
        let deck = find_meta_deck("hog cycle").unwrap();
        assert_eq!(deck.cards[0], "Hog Rider");
        assert!(find_meta_deck("X-Bow 3.0").is_none());
    }

    #[test]
    fn test_meta_average_elixir() {
        // 4 + 4 + 4 + 1 + 3 + 2 + 1 + 4 = 23 / 8 = 2.875
        assert_eq!(META_DECKS[0].average_elixir(), 2.9);
    }

    #[test]
    fn test_popular_pool_has_no_duplicates() {
        let mut pool = POPULAR_CARDS.to_vec();
        pool.sort_unstable();
        pool.dedup();
        assert_eq!(pool.len(), POPULAR_CARDS.len());
    }

    #[test]
    fn test_category_cards() {
        let spells = category_cards("spells").unwrap();
        assert_eq!(spells.len(), 8);
        assert!(spells.contains(&"Log"));
        assert!(category_cards("Buildings").is_none());
    }

    #[test]
    fn test_quick_add_fills_from_category() {
        let mut deck = DeckSlots::new();
        for &card in category_cards("Win Conditions").unwrap() {
            assert!(deck.add_to_first_empty(card));
        }
        for &card in category_cards("Spells").unwrap() {
            deck.add_to_first_empty(card);
        }
        assert!(deck.readiness().is_ready());
        assert_eq!(deck.get(6), Some("Fireball"));
        assert_eq!(deck.get(7), Some("Zap"));
    }
}
