//! The 8-slot deck being built in the coach view.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Number of slots in a deck.
pub const DECK_SIZE: usize = 8;

/// Message shown when a deck is submitted before every slot is filled.
pub const INCOMPLETE_DECK_MESSAGE: &str = "Please fill all 8 card slots";

/// Whether a deck may be handed to the analysis service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckReadiness {
    /// All 8 slots hold a card.
    Ready,
    /// Some slots are blank.
    Incomplete { filled: usize },
}

impl DeckReadiness {
    /// Readiness for any list of slot values.
    ///
    /// Ready iff exactly `DECK_SIZE` entries are non-blank after trimming.
    #[must_use]
    pub fn of<S: AsRef<str>>(slots: &[S]) -> Self {
        let filled = slots.iter().filter(|s| !s.as_ref().trim().is_empty()).count();
        if filled == DECK_SIZE {
            DeckReadiness::Ready
        } else {
            DeckReadiness::Incomplete { filled }
        }
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, DeckReadiness::Ready)
    }

    /// User-facing validation message, `None` when ready.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            DeckReadiness::Ready => None,
            DeckReadiness::Incomplete { .. } => Some(INCOMPLETE_DECK_MESSAGE),
        }
    }
}

/// Eight ordered card slots, each blank or holding a card name.
///
/// Duplicate names are allowed; nothing here rejects them.
///
/// ## Example
///
/// ```
/// use lonorix::deck::DeckSlots;
///
/// let mut deck = DeckSlots::new();
/// deck.set(0, "Hog Rider").unwrap();
/// deck.set(1, "Fireball").unwrap();
///
/// assert_eq!(deck.filled_count(), 2);
/// assert!(!deck.readiness().is_ready());
/// assert_eq!(deck.share_string(), "Hog Rider, Fireball");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckSlots {
    slots: [String; DECK_SIZE],
}

impl DeckSlots {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from up to 8 names. Missing trailing slots stay blank,
    /// extra names are ignored.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deck = Self::new();
        for (slot, name) in deck.slots.iter_mut().zip(names) {
            *slot = name.into();
        }
        deck
    }

    /// Put a card in a slot.
    pub fn set(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange { index })?;
        *slot = name.into();
        Ok(())
    }

    /// Blank a slot.
    pub fn clear_slot(&mut self, index: usize) -> Result<()> {
        self.set(index, String::new())
    }

    /// Blank every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Slot value, `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// All slot values in order, blanks included.
    #[must_use]
    pub fn slots(&self) -> &[String; DECK_SIZE] {
        &self.slots
    }

    /// Non-blank slot values in order, trimmed.
    #[must_use]
    pub fn filled(&self) -> SmallVec<[&str; DECK_SIZE]> {
        self.slots
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled().len()
    }

    /// Whether a card is already in the deck (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.filled().iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    /// Index of the first blank slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.trim().is_empty())
    }

    /// Put a card into the first blank slot.
    ///
    /// Returns `false` and leaves the deck untouched when every slot is
    /// filled or the card is already in the deck.
    pub fn add_to_first_empty(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        match self.first_empty() {
            Some(index) => {
                self.slots[index] = name.to_string();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn readiness(&self) -> DeckReadiness {
        DeckReadiness::of(&self.slots)
    }

    /// The 8 slot values to submit for analysis, exactly as stored, or the
    /// validation message.
    pub fn submission(&self) -> std::result::Result<Vec<String>, &'static str> {
        match self.readiness() {
            DeckReadiness::Ready => Ok(self.slots.to_vec()),
            incomplete => Err(incomplete.message().unwrap_or(INCOMPLETE_DECK_MESSAGE)),
        }
    }

    /// Filled names joined with `", "`, for copying.
    #[must_use]
    pub fn share_string(&self) -> String {
        self.filled().join(", ")
    }
}
