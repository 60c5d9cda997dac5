//! Upgrade priority tiers and the upgrade list.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::collection::{select_and_order, FilterCriteria};

/// Default length of the upgrade list.
pub const UPGRADE_LIST_LEN: usize = 10;

/// How urgently a card should be upgraded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a progress percentage.
///
/// Below 30 is `High`, 30 up to (not including) 70 is `Medium`, the rest
/// is `Low`.
#[must_use]
pub fn priority_of(progress_percent: f64) -> Priority {
    if progress_percent < 30.0 {
        Priority::High
    } else if progress_percent < 70.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// One row of the upgrade list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradeEntry {
    pub card: Card,
    /// Progress percentage, unrounded.
    pub progress: f64,
    pub priority: Priority,
}

/// The `limit` cards furthest from completion, each with its priority.
///
/// Uses the default criteria (maxed cards included, no restrictions), so
/// the list only runs short when the collection does.
#[must_use]
pub fn upgrade_priorities(cards: &[Card], limit: usize) -> Vec<UpgradeEntry> {
    select_and_order(cards, &FilterCriteria::default())
        .into_iter()
        .take(limit)
        .map(|card| {
            let progress = card.progress();
            UpgradeEntry {
                priority: priority_of(progress),
                progress,
                card,
            }
        })
        .collect()
}
