//! In-memory deck library: saved decks and recent analyses.
//!
//! Nothing here is persisted. The library lives as long as the session
//! that owns it; snapshots are O(1) to clone thanks to `im`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::slots::DeckSlots;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::services::coach::DeckAnalysis;

/// Number of analyses kept in the history.
pub const ANALYSIS_HISTORY_LEN: usize = 10;

/// A deck the user saved under a name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDeck {
    pub id: u64,
    pub name: String,
    pub cards: DeckSlots,
    pub analysis: Option<DeckAnalysis>,
    /// Seconds since the Unix epoch, supplied by the caller.
    pub created_at: u64,
    /// 1 to 5 stars, set explicitly by the user.
    pub rating: Option<u8>,
}

/// One past analysis and the deck it was for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub deck: Vec<String>,
    pub analysis: DeckAnalysis,
}

/// Saved decks plus a bounded analysis history.
///
/// ## Example
///
/// ```
/// use lonorix::deck::{DeckLibrary, META_DECKS};
///
/// let mut library = DeckLibrary::new();
/// let id = library.save("My Hog", &META_DECKS[0].to_slots(), None, 0).unwrap();
///
/// let snapshot = library.clone();
/// library.remove(id).unwrap();
///
/// assert!(library.is_empty());
/// assert_eq!(snapshot.get(id).unwrap().name, "My Hog");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckLibrary {
    decks: Vector<SavedDeck>,
    history: Vector<AnalysisRecord>,
    history_limit: usize,
    next_id: u64,
}

impl Default for DeckLibrary {
    fn default() -> Self {
        Self::with_history_limit(ANALYSIS_HISTORY_LEN)
    }
}

impl DeckLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library keeping at most `limit` analyses.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            decks: Vector::new(),
            history: Vector::new(),
            history_limit: limit,
            next_id: 1,
        }
    }

    /// Create a library sized by `config.analysis_history_len`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_history_limit(config.analysis_history_len)
    }

    /// Save a copy of `cards` under `name`. Returns the new deck's id.
    ///
    /// Blank names are rejected.
    pub fn save(
        &mut self,
        name: &str,
        cards: &DeckSlots,
        analysis: Option<DeckAnalysis>,
        created_at: u64,
    ) -> Result<u64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidDeckName);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.decks.push_back(SavedDeck {
            id,
            name: name.to_string(),
            cards: cards.clone(),
            analysis,
            created_at,
            rating: None,
        });
        tracing::debug!(id, name, "saved deck");
        Ok(id)
    }

    /// Rate a saved deck, clamped to 1..=5 stars.
    pub fn rate(&mut self, id: u64, stars: u8) -> Result<()> {
        let index = self.index_of(id)?;
        let mut deck = self.decks[index].clone();
        deck.rating = Some(stars.clamp(1, 5));
        self.decks.set(index, deck);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SavedDeck> {
        self.decks.iter().find(|d| d.id == id)
    }

    /// Remove a saved deck and return it.
    pub fn remove(&mut self, id: u64) -> Result<SavedDeck> {
        let index = self.index_of(id)?;
        Ok(self.decks.remove(index))
    }

    /// Saved decks in the order they were saved.
    pub fn iter(&self) -> impl Iterator<Item = &SavedDeck> {
        self.decks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Remember an analysis, dropping the oldest beyond the limit.
    pub fn record_analysis(&mut self, deck: Vec<String>, analysis: DeckAnalysis) {
        self.history.push_back(AnalysisRecord { deck, analysis });
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Past analyses, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.history.iter()
    }

    /// The most recent analysis.
    #[must_use]
    pub fn latest_analysis(&self) -> Option<&AnalysisRecord> {
        self.history.last()
    }

    fn index_of(&self, id: u64) -> Result<usize> {
        self.decks
            .iter()
            .position(|d| d.id == id)
            .ok_or(Error::DeckNotFound { id })
    }
}
