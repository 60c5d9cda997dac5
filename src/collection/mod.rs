//! Collection filter/sort engine and aggregate statistics.
//!
//! ## Key Types
//!
//! - `FilterCriteria`: Caller-owned filter/sort settings
//! - `select_and_order`: Filtered, stably sorted copy of a collection
//! - `CollectionStats`: Totals, per-tier counts, completion percentages
//!
//! Everything here is a pure function of its inputs. Callers re-run the
//! engine on every control change; no results are cached.

pub mod criteria;
pub mod engine;
pub mod stats;

pub use criteria::{FilterCriteria, RarityFilter, SortKey};
pub use engine::{compare, matches, select_and_order};
pub use stats::{next_priority, rarity_progress, CollectionStats, RarityCounts, RarityProgress};
