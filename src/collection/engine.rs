//! Collection filter/sort engine.
//!
//! `select_and_order` is called on every control change against the same
//! collection, so the sort is stable: cards with equal keys keep their input
//! order between recomputes.

use std::cmp::Ordering;

use crate::cards::Card;

use super::criteria::{FilterCriteria, SortKey};

/// Filter `cards` by `criteria` and return the survivors in display order.
///
/// The input is never modified. Empty input, unknown rarities (already
/// normalized to common) and cards above their max level are all accepted.
///
/// ## Example
///
/// ```
/// use lonorix::cards::{Card, Rarity};
/// use lonorix::collection::{select_and_order, FilterCriteria};
///
/// let cards = vec![
///     Card::new("Knight", 13, 13, Rarity::Common),
///     Card::new("Giant", 9, 11, Rarity::Rare),
///     Card::new("Witch", 3, 7, Rarity::Epic),
///     Card::new("Miner", 1, 5, Rarity::Legendary),
/// ];
///
/// let shown = select_and_order(&cards, &FilterCriteria::default().hide_maxed());
/// let names: Vec<_> = shown.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Miner", "Witch", "Giant"]);
/// ```
#[must_use]
pub fn select_and_order(cards: &[Card], criteria: &FilterCriteria) -> Vec<Card> {
    let needle = criteria.search_term.to_lowercase();

    let mut selected: Vec<Card> = cards
        .iter()
        .filter(|card| passes(card, criteria, &needle))
        .cloned()
        .collect();

    // slice::sort_by is stable
    selected.sort_by(|a, b| compare(a, b, criteria.sort_key));

    tracing::trace!(
        input = cards.len(),
        output = selected.len(),
        sort = ?criteria.sort_key,
        "recomputed collection view"
    );

    selected
}

/// Check a single card against the criteria.
#[must_use]
pub fn matches(card: &Card, criteria: &FilterCriteria) -> bool {
    passes(card, criteria, &criteria.search_term.to_lowercase())
}

fn passes(card: &Card, criteria: &FilterCriteria, needle: &str) -> bool {
    card.name_contains(needle)
        && criteria.rarity_filter.admits(card.rarity)
        && card.level >= criteria.min_level
        && (criteria.show_maxed || card.level < card.max_level)
}

/// Comparator for a sort key.
#[must_use]
pub fn compare(a: &Card, b: &Card, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Level => b.level.cmp(&a.level),
        SortKey::Rarity => b.rarity.rank().cmp(&a.rarity.rank()),
        SortKey::Progress => a
            .progress_ratio()
            .partial_cmp(&b.progress_ratio())
            .unwrap_or(Ordering::Equal),
    }
}

/// Case-insensitive name comparison.
///
/// Names differing only in case compare equal so the stable sort keeps
/// their input order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
