//! Application configuration.
//!
//! `AppConfig` holds the API credentials and the handful of tunables the
//! services and views use. Build it with `Default` plus the `with_*`
//! methods, or read it from the environment with `from_env`.
//!
//! | Variable                  | Field            |
//! |---------------------------|------------------|
//! | `CLASH_API_KEY`           | `clash_api_key`  |
//! | `OPENAI_API_KEY`          | `openai_api_key` |
//! | `LONORIX_CLASH_API_BASE`  | `clash_api_base` |
//! | `LONORIX_COACH_MODEL`     | `coach_model`    |

use serde::{Deserialize, Serialize};

use crate::deck::{ANALYSIS_HISTORY_LEN, UPGRADE_LIST_LEN};

pub const DEFAULT_CLASH_API_BASE: &str = "https://api.clashroyale.com/v1";
pub const DEFAULT_COACH_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_COACH_MODEL: &str = "gpt-4o-mini";

/// Number of players shown from the global rankings.
pub const DEFAULT_RANKINGS_LIMIT: usize = 8;

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key for the Clash Royale API. Never serialized.
    #[serde(skip_serializing)]
    pub clash_api_key: Option<String>,

    /// Key for the chat-completion API. Never serialized.
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// Base URL of the Clash Royale API, without trailing slash.
    pub clash_api_base: String,

    /// Chat-completion endpoint used by the deck coach.
    pub coach_endpoint: String,

    /// Model name sent to the chat-completion endpoint.
    pub coach_model: String,

    /// Sampling temperature for the coach.
    pub coach_temperature: f64,

    /// Completion token limit for the coach.
    pub coach_max_tokens: u32,

    /// How many players the rankings view shows.
    pub rankings_limit: usize,

    /// How many cards the upgrade list shows.
    pub upgrade_list_len: usize,

    /// How many analyses the deck library remembers.
    pub analysis_history_len: usize,

    /// Serve the sample player when the player API is unusable
    /// (no key, or access denied).
    pub sample_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clash_api_key: None,
            openai_api_key: None,
            clash_api_base: DEFAULT_CLASH_API_BASE.to_string(),
            coach_endpoint: DEFAULT_COACH_ENDPOINT.to_string(),
            coach_model: DEFAULT_COACH_MODEL.to_string(),
            coach_temperature: 0.7,
            coach_max_tokens: 1000,
            rankings_limit: DEFAULT_RANKINGS_LIMIT,
            upgrade_list_len: UPGRADE_LIST_LEN,
            analysis_history_len: ANALYSIS_HISTORY_LEN,
            sample_fallback: true,
        }
    }
}

impl AppConfig {
    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through an arbitrary lookup function.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.clash_api_key = get("CLASH_API_KEY");
        config.openai_api_key = get("OPENAI_API_KEY");
        if let Some(base) = get("LONORIX_CLASH_API_BASE") {
            config = config.with_clash_api_base(base);
        }
        if let Some(model) = get("LONORIX_COACH_MODEL") {
            config.coach_model = model;
        }

        tracing::debug!(
            clash_key = config.clash_api_key.is_some(),
            openai_key = config.openai_api_key.is_some(),
            base = %config.clash_api_base,
            "loaded configuration"
        );
        config
    }

    #[must_use]
    pub fn with_clash_api_key(mut self, key: impl Into<String>) -> Self {
        self.clash_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Set the Clash API base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_clash_api_base(mut self, base: impl Into<String>) -> Self {
        self.clash_api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_coach_model(mut self, model: impl Into<String>) -> Self {
        self.coach_model = model.into();
        self
    }

    #[must_use]
    pub fn with_rankings_limit(mut self, limit: usize) -> Self {
        self.rankings_limit = limit;
        self
    }

    #[must_use]
    pub fn with_upgrade_list_len(mut self, len: usize) -> Self {
        self.upgrade_list_len = len;
        self
    }

    /// Disable the sample-player fallback.
    #[must_use]
    pub fn without_sample_fallback(mut self) -> Self {
        self.sample_fallback = false;
        self
    }
}
