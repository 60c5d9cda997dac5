//! Player lookup against the Clash Royale API.
//!
//! Normalizes the player payload into a `PlayerRecord` whose `cards` feed
//! the collection engine directly. Rarity is lower-cased and mapped to the
//! closed tier set here, at ingestion, so the engine never sees raw strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{encode_component, is_success, ApiRequest};
use crate::cards::{Card, Rarity};
use crate::config::AppConfig;
use crate::error::{Error, Result};

/// A player and their normalized card collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub tag: String,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub cards: Vec<Card>,
}

impl PlayerRecord {
    /// Parse and normalize a player payload.
    ///
    /// The payload must have a non-empty `name` and `tag` and a `cards`
    /// array; anything else about it is tolerated.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;

        let has_text = |key: &str| value.get(key).and_then(Value::as_str).is_some_and(|s| !s.is_empty());
        let has_cards = value.get("cards").is_some_and(Value::is_array);
        if !(has_text("name") && has_text("tag") && has_cards) {
            return Err(Error::InvalidPlayerData);
        }

        let raw: RawPlayer = serde_json::from_value(value)?;
        Ok(raw.normalize())
    }

    /// Fixed record served when the player API cannot be used.
    #[must_use]
    pub fn sample(tag: &str) -> Self {
        const SAMPLE_CARDS: [(&str, u32, u32, Rarity); 16] = [
            ("Knight", 13, 13, Rarity::Common),
            ("Archers", 12, 13, Rarity::Common),
            ("Fireball", 11, 12, Rarity::Rare),
            ("Musketeer", 10, 12, Rarity::Rare),
            ("Giant", 9, 11, Rarity::Rare),
            ("Wizard", 8, 11, Rarity::Rare),
            ("Prince", 6, 8, Rarity::Epic),
            ("Baby Dragon", 5, 8, Rarity::Epic),
            ("Skeleton Army", 4, 7, Rarity::Epic),
            ("Witch", 3, 7, Rarity::Epic),
            ("Mega Knight", 2, 5, Rarity::Legendary),
            ("Princess", 1, 5, Rarity::Legendary),
            ("Ice Wizard", 1, 5, Rarity::Legendary),
            ("Lumberjack", 2, 5, Rarity::Legendary),
            ("Miner", 1, 5, Rarity::Legendary),
            ("Sparky", 1, 5, Rarity::Legendary),
        ];

        Self {
            name: "Test Player".to_string(),
            tag: tag.to_string(),
            exp_level: 14,
            trophies: 5500,
            best_trophies: 6200,
            cards: SAMPLE_CARDS
                .iter()
                .map(|&(name, level, max_level, rarity)| Card::new(name, level, max_level, rarity))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlayer {
    name: String,
    tag: String,
    #[serde(default)]
    exp_level: u32,
    #[serde(default)]
    trophies: u32,
    #[serde(default)]
    best_trophies: u32,
    cards: Vec<Card>,
}

impl RawPlayer {
    fn normalize(self) -> PlayerRecord {
        PlayerRecord {
            name: self.name,
            tag: self.tag,
            exp_level: self.exp_level,
            trophies: self.trophies,
            best_trophies: self.best_trophies,
            cards: self.cards,
        }
    }
}

/// Ensure a player tag starts with `#`.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

/// What to do for a lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerLookup {
    /// Send this request and pass the response to `handle_response`.
    Fetch(ApiRequest),
    /// No request possible; use this record.
    Sample(PlayerRecord),
}

/// Player lookup boundary.
#[derive(Clone, Debug)]
pub struct PlayerService {
    api_base: String,
    api_key: Option<String>,
    sample_fallback: bool,
}

impl PlayerService {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_base: config.clash_api_base.clone(),
            api_key: config.clash_api_key.clone(),
            sample_fallback: config.sample_fallback,
        }
    }

    /// Plan a lookup for `tag`.
    pub fn lookup(&self, tag: &str) -> Result<PlayerLookup> {
        let tag = normalize_tag(tag);
        match &self.api_key {
            Some(key) => {
                let url = format!("{}/players/{}", self.api_base, encode_component(&tag));
                tracing::debug!(%tag, %url, "fetching player");
                Ok(PlayerLookup::Fetch(ApiRequest::get(url, key)))
            }
            None if self.sample_fallback => {
                tracing::warn!(%tag, "CLASH_API_KEY not configured, serving sample player");
                Ok(PlayerLookup::Sample(PlayerRecord::sample(&tag)))
            }
            None => Err(Error::MissingApiKey("CLASH_API_KEY")),
        }
    }

    /// Turn the API response for `tag` into a player record.
    pub fn handle_response(&self, tag: &str, status: u16, body: &str) -> Result<PlayerRecord> {
        let tag = normalize_tag(tag);
        if is_success(status) {
            let record = PlayerRecord::from_json(body)?;
            tracing::info!(name = %record.name, cards = record.cards.len(), "player loaded");
            return Ok(record);
        }

        if status == 403 && self.sample_fallback {
            tracing::warn!(%tag, "player API access denied, serving sample player");
            return Ok(PlayerRecord::sample(&tag));
        }

        tracing::error!(%tag, status, "player API error");
        Err(Error::from_status(status, body, Some(tag.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "name": "Ana",
        "tag": "#2PP",
        "expLevel": 50,
        "trophies": 7000,
        "bestTrophies": 7400,
        "cards": [
            {"name": "Knight", "id": 26000000, "level": 14, "maxLevel": 14, "rarity": "Common"},
            {"name": "Mirror", "level": 3, "maxLevel": 6, "rarity": "Legendary"},
            {"name": "Archer Queen", "level": 1, "maxLevel": 4, "rarity": "Champion"},
            {"name": "Zap", "level": 9, "maxLevel": 14}
        ]
    }"##;

    #[test]
    fn test_from_json_normalizes() {
        let record = PlayerRecord::from_json(PAYLOAD).unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.exp_level, 50);
        assert_eq!(record.best_trophies, 7400);

        let rarities: Vec<_> = record.cards.iter().map(|c| c.rarity).collect();
        assert_eq!(
            rarities,
            [Rarity::Common, Rarity::Legendary, Rarity::Common, Rarity::Common]
        );
    }

    #[test]
    fn test_from_json_requires_fields() {
        let missing_cards = r##"{"name": "Ana", "tag": "#2PP"}"##;
        assert!(matches!(PlayerRecord::from_json(missing_cards), Err(Error::InvalidPlayerData)));

        let cards_not_array = r##"{"name": "Ana", "tag": "#2PP", "cards": {}}"##;
        assert!(matches!(PlayerRecord::from_json(cards_not_array), Err(Error::InvalidPlayerData)));

        let empty_name = r##"{"name": "", "tag": "#2PP", "cards": []}"##;
        assert!(matches!(PlayerRecord::from_json(empty_name), Err(Error::InvalidPlayerData)));

        assert!(matches!(PlayerRecord::from_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_zero_max_level_clamped() {
        let body = r##"{"name": "A", "tag": "#A", "cards": [{"name": "X", "level": 1, "maxLevel": 0}]}"##;
        let record = PlayerRecord::from_json(body).unwrap();
        assert_eq!(record.cards[0].max_level, 1);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("2PP"), "#2PP");
        assert_eq!(normalize_tag(" #2PP "), "#2PP");
    }

    #[test]
    fn test_lookup_without_key() {
        let service = PlayerService::from_config(&AppConfig::default());
        match service.lookup("2PP").unwrap() {
            PlayerLookup::Sample(record) => {
                assert_eq!(record.tag, "#2PP");
                assert_eq!(record.cards.len(), 16);
            }
            PlayerLookup::Fetch(_) => panic!("expected sample"),
        }

        let strict = PlayerService::from_config(&AppConfig::default().without_sample_fallback());
        assert!(matches!(strict.lookup("2PP"), Err(Error::MissingApiKey("CLASH_API_KEY"))));
    }

    #[test]
    fn test_lookup_with_key() {
        let config = AppConfig::default().with_clash_api_key("k");
        let service = PlayerService::from_config(&config);

        let PlayerLookup::Fetch(request) = service.lookup("#2PP").unwrap() else {
            panic!("expected fetch");
        };
        assert_eq!(request.url, "https://api.clashroyale.com/v1/players/%232PP");
        assert_eq!(request.header("Authorization"), Some("Bearer k"));
    }

    #[test]
    fn test_handle_response_statuses() {
        let service = PlayerService::from_config(&AppConfig::default().with_clash_api_key("k"));

        assert!(service.handle_response("2PP", 200, PAYLOAD).is_ok());
        assert!(matches!(
            service.handle_response("2PP", 404, ""),
            Err(Error::PlayerNotFound { tag }) if tag == "#2PP"
        ));
        assert!(matches!(service.handle_response("2PP", 429, ""), Err(Error::RateLimited)));
        assert!(matches!(
            service.handle_response("2PP", 500, "boom"),
            Err(Error::Upstream { status: 500, .. })
        ));

        let sample = service.handle_response("2PP", 403, "").unwrap();
        assert_eq!(sample.name, "Test Player");
    }

    #[test]
    fn test_access_denied_without_fallback() {
        let config = AppConfig::default().with_clash_api_key("k").without_sample_fallback();
        let service = PlayerService::from_config(&config);
        assert!(matches!(service.handle_response("2PP", 403, ""), Err(Error::AccessDenied)));
    }
}
