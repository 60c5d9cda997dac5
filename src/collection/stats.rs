//! Aggregate statistics over a whole collection.
//!
//! Always computed over the unfiltered collection, never over the current
//! filtered view.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rarity};

use super::criteria::FilterCriteria;
use super::engine::select_and_order;

/// Per-tier card counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityCounts {
    pub common: usize,
    pub rare: usize,
    pub epic: usize,
    pub legendary: usize,
}

impl RarityCounts {
    /// Count for one tier.
    #[must_use]
    pub fn get(&self, rarity: Rarity) -> usize {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    fn bump(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Common => self.common += 1,
            Rarity::Rare => self.rare += 1,
            Rarity::Epic => self.epic += 1,
            Rarity::Legendary => self.legendary += 1,
        }
    }
}

/// How far one tier is from being fully maxed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityProgress {
    pub rarity: Rarity,
    pub maxed: usize,
    pub total: usize,
    /// `round(maxed / total * 100)`, 0 for an empty tier.
    pub percent: u32,
}

/// Collection-wide statistics for the planner overview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Number of cards.
    pub total: usize,

    /// Cards at exactly their max level.
    pub maxed: usize,

    /// Per-tier counts.
    pub counts: RarityCounts,

    /// `round(maxed / total * 100)`, 0 when empty.
    pub completion_percent: u32,

    /// `round(mean(level / max_level) * 100)`, 0 when empty.
    pub average_progress_percent: u32,
}

impl CollectionStats {
    /// Compute statistics for a collection.
    #[must_use]
    pub fn compute(cards: &[Card]) -> Self {
        let mut stats = Self {
            total: cards.len(),
            ..Self::default()
        };

        let mut ratio_sum = 0.0;
        for card in cards {
            if card.is_maxed() {
                stats.maxed += 1;
            }
            stats.counts.bump(card.rarity);
            ratio_sum += card.progress_ratio();
        }

        if stats.total > 0 {
            let total = stats.total as f64;
            stats.completion_percent = round_percent(stats.maxed as f64 / total);
            stats.average_progress_percent = round_percent(ratio_sum / total);
        }

        stats
    }

    /// Cards that can still be upgraded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.maxed
    }

    /// The tier holding the most cards. Ties go to the lower tier.
    ///
    /// `None` for an empty collection.
    #[must_use]
    pub fn focus_rarity(&self) -> Option<Rarity> {
        if self.total == 0 {
            return None;
        }
        // max_by_key keeps the last maximum, so walk from legendary down
        Rarity::ALL
            .iter()
            .rev()
            .copied()
            .max_by_key(|&r| self.counts.get(r))
    }
}

/// Maxed/total breakdown for each tier, common first.
#[must_use]
pub fn rarity_progress(cards: &[Card]) -> [RarityProgress; 4] {
    Rarity::ALL.map(|rarity| {
        let (maxed, total) = cards
            .iter()
            .filter(|c| c.rarity == rarity)
            .fold((0, 0), |(maxed, total), c| {
                (maxed + usize::from(c.is_maxed()), total + 1)
            });
        let percent = if total == 0 {
            0
        } else {
            round_percent(maxed as f64 / total as f64)
        };
        RarityProgress {
            rarity,
            maxed,
            total,
            percent,
        }
    })
}

/// Name of the card the upgrade list puts first, if any.
#[must_use]
pub fn next_priority(cards: &[Card]) -> Option<String> {
    select_and_order(cards, &FilterCriteria::default())
        .into_iter()
        .next()
        .map(|c| c.name)
}

fn round_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}
