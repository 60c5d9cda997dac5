//! Error type shared by the deck editor and the collaborator boundaries.
//!
//! The filter/sort engine and the elixir calculator never fail: unknown
//! rarities, unknown cards and empty inputs are normalized instead. Errors
//! only come from editing operations and from upstream responses.

use thiserror::Error;

/// Main error type for lonorix operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required API key is not configured.
    #[error("{0} is not configured")]
    MissingApiKey(&'static str),

    /// The player API returned 404 for the requested tag.
    #[error("Player not found: {tag}")]
    PlayerNotFound { tag: String },

    /// The player API rejected our credentials (403).
    #[error("API access denied. The Clash Royale API key is invalid, expired, or IP restricted")]
    AccessDenied,

    /// The upstream API is throttling us (429).
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// Any other non-success upstream status.
    #[error("Upstream API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// Player payload is missing `name`, `tag` or the `cards` array.
    #[error("Invalid player data received from API")]
    InvalidPlayerData,

    /// Upstream payload does not have the expected envelope.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Deck submitted for analysis is not exactly 8 filled cards.
    #[error("Invalid deck format. Must be an array of 8 cards, got {filled}")]
    InvalidDeck { filled: usize },

    /// Saved decks need a non-blank name.
    #[error("Please enter a deck name")]
    InvalidDeckName,

    /// Slot index outside `0..8`.
    #[error("Deck slot {index} out of range")]
    SlotOutOfRange { index: usize },

    /// No saved deck with this id.
    #[error("Saved deck not found: {id}")]
    DeckNotFound { id: u64 },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map a non-success status from an upstream API to an error.
    ///
    /// 403 is reported as `AccessDenied` here; callers that fall back to
    /// sample data check for it before calling this.
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>, tag: Option<&str>) -> Self {
        match (status, tag) {
            (404, Some(tag)) => Error::PlayerNotFound {
                tag: tag.to_string(),
            },
            (403, _) => Error::AccessDenied,
            (429, _) => Error::RateLimited,
            _ => Error::Upstream {
                status,
                body: body.into(),
            },
        }
    }

    /// Whether retrying the same request later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited => true,
            Error::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
