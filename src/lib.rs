//! # lonorix
//!
//! Card collection and deck coaching for Clash Royale players.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Filtering, sorting, statistics, elixir averages and
//!    upgrade priorities are pure functions over caller-owned values.
//!    Nothing here holds ambient UI state.
//!
//! 2. **Normalize at the Edge**: Player payloads are validated and their
//!    rarities mapped to a closed enum on ingestion, so the engine never
//!    special-cases malformed input.
//!
//! 3. **No I/O in the Library**: Service boundaries describe requests and
//!    interpret responses; the caller owns the HTTP client.
//!
//! ## Modules
//!
//! - `cards`: Rarity tiers, owned cards, elixir costs
//! - `collection`: Filter/sort engine and collection statistics
//! - `deck`: Deck slots, readiness gate, elixir average, upgrade priorities,
//!   meta decks, randomization, saved decks
//! - `services`: Player lookup, deck analysis, global rankings
//! - `config`: Runtime configuration
//! - `error`: Crate error type

pub mod cards;
pub mod collection;
pub mod config;
pub mod deck;
pub mod error;
pub mod services;

// Re-export commonly used types
pub use crate::cards::{Card, ElixirTable, Rarity};

pub use crate::collection::{
    select_and_order, CollectionStats, FilterCriteria, RarityFilter, SortKey,
};

pub use crate::deck::{
    average_elixir, priority_of, upgrade_priorities, DeckLibrary, DeckReadiness, DeckRng,
    DeckSlots, Priority, UpgradeEntry,
};

pub use crate::services::coach::{CoachService, DeckAnalysis};
pub use crate::services::player::{PlayerLookup, PlayerRecord, PlayerService};
pub use crate::services::rankings::{RankedPlayer, RankingsService};

pub use crate::config::AppConfig;
pub use crate::error::{Error, Result};
