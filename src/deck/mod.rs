//! Deck coach: slots, elixir average, upgrade priorities, meta decks,
//! randomization and the in-memory deck library.
//!
//! ## Key Types
//!
//! - `DeckSlots`: The 8 slots being edited
//! - `DeckReadiness`: Gate deciding whether a deck can be analyzed
//! - `average_elixir`: Mean elixir cost, one decimal
//! - `priority_of` / `upgrade_priorities`: High/Medium/Low upgrade tiers
//! - `DeckLibrary`: Saved decks and recent analyses

pub mod library;
pub mod meta;
pub mod metrics;
pub mod priority;
pub mod randomize;
pub mod slots;

pub use library::{AnalysisRecord, DeckLibrary, SavedDeck, ANALYSIS_HISTORY_LEN};
pub use meta::{category_cards, find_meta_deck, MetaDeck, CARD_CATEGORIES, META_DECKS, POPULAR_CARDS};
pub use metrics::{average_elixir, average_elixir_with};
pub use priority::{priority_of, upgrade_priorities, Priority, UpgradeEntry, UPGRADE_LIST_LEN};
pub use randomize::DeckRng;
pub use slots::{DeckReadiness, DeckSlots, DECK_SIZE, INCOMPLETE_DECK_MESSAGE};
