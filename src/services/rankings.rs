//! Global player rankings.

use serde::{Deserialize, Serialize};

use super::{is_success, ApiRequest};
use crate::config::AppConfig;
use crate::error::{Error, Result};

/// One row of the rankings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub rank: u32,
    pub name: String,
    pub tag: String,
    pub trophies: u32,
    pub clan: String,
    pub clan_tag: String,
    /// Positions gained since the previous season, negative when dropped.
    pub change: i64,
    pub arena: String,
    pub level: u32,
}

#[derive(Deserialize)]
struct RawRankings {
    items: Vec<RawRankedPlayer>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRankedPlayer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    trophies: u32,
    #[serde(default)]
    exp_level: u32,
    #[serde(default)]
    previous_rank: Option<i64>,
    #[serde(default)]
    clan: Option<RawNamed>,
    #[serde(default)]
    arena: Option<RawNamed>,
}

#[derive(Deserialize)]
struct RawNamed {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tag: String,
}

impl RawRankedPlayer {
    fn into_ranked(self, rank: u32) -> RankedPlayer {
        let (clan, clan_tag) = match self.clan {
            Some(c) if !c.name.is_empty() => (c.name, c.tag),
            Some(c) => ("No Clan".to_string(), c.tag),
            None => ("No Clan".to_string(), String::new()),
        };
        let arena = self
            .arena
            .map(|a| a.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Unknown Arena".to_string());
        let change = match self.previous_rank {
            Some(previous) if previous != 0 => previous - i64::from(rank),
            _ => 0,
        };

        RankedPlayer {
            rank,
            name: self.name,
            tag: self.tag,
            trophies: self.trophies,
            clan,
            clan_tag,
            change,
            arena,
            level: self.exp_level.max(1),
        }
    }
}

/// Rankings boundary.
#[derive(Clone, Debug)]
pub struct RankingsService {
    api_base: String,
    api_key: Option<String>,
    limit: usize,
}

impl RankingsService {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_base: config.clash_api_base.clone(),
            api_key: config.clash_api_key.clone(),
            limit: config.rankings_limit,
        }
    }

    pub fn request(&self) -> Result<ApiRequest> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("CLASH_API_KEY"))?;
        let url = format!("{}/locations/global/rankings/players", self.api_base);
        tracing::debug!(%url, "fetching global rankings");
        Ok(ApiRequest::get(url, key))
    }

    /// Transform the rankings response into the top `limit` rows.
    ///
    /// Every non-2xx status is reported as `Error::Upstream`.
    pub fn handle_response(&self, status: u16, body: &str) -> Result<Vec<RankedPlayer>> {
        if !is_success(status) {
            tracing::error!(status, "rankings API error");
            return Err(Error::Upstream {
                status,
                body: body.to_string(),
            });
        }

        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.get("items").is_some_and(serde_json::Value::is_array) {
            return Err(Error::MalformedResponse("missing items".to_string()));
        }
        let raw: RawRankings = serde_json::from_value(value)?;

        Ok(raw
            .items
            .into_iter()
            .take(self.limit)
            .zip(1u32..)
            .map(|(player, rank)| player.into_ranked(rank))
            .collect())
    }
}
