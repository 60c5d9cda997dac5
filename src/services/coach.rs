//! Deck analysis through a chat-completion API.
//!
//! The model is asked for a JSON object with a fixed shape. Its reply is
//! parsed best-effort; when nothing usable comes back the caller gets a
//! fixed fallback analysis instead of an error.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{is_success, ApiRequest};
use crate::config::AppConfig;
use crate::deck::DECK_SIZE;
use crate::error::{Error, Result};

const SYSTEM_PROMPT: &str = r#"You are a Clash Royale Deck Coach expert. Analyze the given deck and provide structured insights.

Respond in the following JSON format:
{
  "winCondition": "Brief description of the main win condition",
  "strengths": ["strength1", "strength2", "strength3"],
  "weaknesses": ["weakness1", "weakness2", "weakness3"],
  "strategy": "Overall strategy description in 2-3 sentences",
  "tips": ["tip1", "tip2", "tip3", "tip4"]
}

Focus on:
- Win conditions and damage dealers
- Defensive capabilities
- Synergies between cards
- Average elixir cost considerations
- Counter-play vulnerabilities
- Meta relevance and effectiveness"#;

/// Structured deck analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckAnalysis {
    pub win_condition: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub strategy: String,
    pub tips: Vec<String>,
}

impl DeckAnalysis {
    /// Returned when the model's reply cannot be used.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            win_condition: "Unable to parse detailed analysis".to_string(),
            strengths: vec!["Diverse card selection".to_string()],
            weaknesses: vec!["Analysis parsing failed".to_string()],
            strategy: "Please try analyzing your deck again.".to_string(),
            tips: vec![
                "Ensure all card names are correctly spelled".to_string(),
                "Try refreshing and submitting again".to_string(),
            ],
        }
    }

    /// Both free-text fields are non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.win_condition.trim().is_empty() && !self.strategy.trim().is_empty()
    }

    /// Parse a model reply.
    ///
    /// Tries the whole reply as JSON first, then the outermost `{...}` block
    /// (models like to wrap JSON in prose or code fences). Falls back to
    /// `DeckAnalysis::fallback()` when neither yields a complete analysis.
    #[must_use]
    pub fn parse_reply(content: &str) -> Self {
        let embedded = match (content.find('{'), content.rfind('}')) {
            (Some(start), Some(end)) if start < end => Some(&content[start..=end]),
            _ => None,
        };

        std::iter::once(content.trim())
            .chain(embedded)
            .filter_map(|candidate| serde_json::from_str::<DeckAnalysis>(candidate).ok())
            .find(DeckAnalysis::is_complete)
            .unwrap_or_else(|| {
                tracing::warn!(len = content.len(), "failed to parse deck analysis, using fallback");
                Self::fallback()
            })
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

/// Deck analysis boundary.
#[derive(Clone, Debug)]
pub struct CoachService {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl CoachService {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            endpoint: config.coach_endpoint.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.coach_model.clone(),
            temperature: config.coach_temperature,
            max_tokens: config.coach_max_tokens,
        }
    }

    /// The chat-completion body for a deck, without credentials.
    ///
    /// The deck must hold exactly 8 non-blank names.
    pub fn request_body<S: AsRef<str>>(&self, deck: &[S]) -> Result<Value> {
        let cards: Vec<&str> = deck
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();
        if cards.len() != DECK_SIZE {
            return Err(Error::InvalidDeck { filled: cards.len() });
        }

        let messages = [
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: format!("Analyze this Clash Royale deck: {}", cards.join(", ")),
            },
        ];

        Ok(json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        }))
    }

    /// The full request for a deck.
    pub fn request<S: AsRef<str>>(&self, deck: &[S]) -> Result<ApiRequest> {
        let body = self.request_body(deck)?;
        let key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("OPENAI_API_KEY"))?;
        tracing::debug!(model = %self.model, "sending deck for analysis");
        Ok(ApiRequest::post_json(self.endpoint.clone(), key, body))
    }

    /// Extract the analysis from a chat-completion response.
    pub fn handle_response(&self, status: u16, body: &str) -> Result<DeckAnalysis> {
        if !is_success(status) {
            tracing::error!(status, "analysis API error");
            return Err(Error::Upstream {
                status,
                body: body.to_string(),
            });
        }

        let value: Value = serde_json::from_str(body)?;
        let content = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MalformedResponse("missing choices[0].message.content".to_string()))?;

        Ok(DeckAnalysis::parse_reply(content))
    }
}
