//! Collaborator boundary tests.
//!
//! The services never perform I/O, so these tests drive them with canned
//! `(status, body)` pairs the way a caller's HTTP client would.

use lonorix::collection::{select_and_order, FilterCriteria};
use lonorix::config::AppConfig;
use lonorix::deck::{DeckLibrary, META_DECKS};
use lonorix::error::Error;
use lonorix::services::coach::{CoachService, DeckAnalysis};
use lonorix::services::player::{PlayerLookup, PlayerService};
use lonorix::services::rankings::RankingsService;
use lonorix::services::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

fn config() -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "CLASH_API_KEY" => Some("clash-key".to_string()),
        "OPENAI_API_KEY" => Some("openai-key".to_string()),
        "LONORIX_CLASH_API_BASE" => Some("http://proxy.local/v1/".to_string()),
        _ => None,
    })
}

/// Lookup, response handling, then the engine on the normalized cards.
#[test]
fn test_player_round_trip() {
    let service = PlayerService::from_config(&config());

    let PlayerLookup::Fetch(request) = service.lookup("9CQ2").unwrap() else {
        panic!("expected a fetch with a configured key");
    };
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://proxy.local/v1/players/%239CQ2");
    assert_eq!(request.header("Authorization"), Some("Bearer clash-key"));

    let body = json!({
        "name": "Pat",
        "tag": "#9CQ2",
        "expLevel": 42,
        "trophies": 6100,
        "bestTrophies": 6500,
        "cards": [
            {"name": "Hog Rider", "level": 11, "maxLevel": 14, "rarity": "RARE"},
            {"name": "The Log", "level": 5, "maxLevel": 6, "rarity": "legendary"},
            {"name": "Skeletons", "level": 14, "maxLevel": 14, "rarity": "common"}
        ]
    })
    .to_string();

    let record = service.handle_response("9CQ2", 200, &body).unwrap();
    let shown = select_and_order(&record.cards, &FilterCriteria::default().hide_maxed());
    let names: Vec<_> = shown.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Hog Rider", "The Log"]);
}

#[test]
fn test_player_invalid_payload() {
    let service = PlayerService::from_config(&config());
    let body = json!({"name": "Pat", "cards": []}).to_string();
    assert!(matches!(
        service.handle_response("9CQ2", 200, &body),
        Err(Error::InvalidPlayerData)
    ));
}

#[test]
fn test_coach_round_trip() {
    let coach = CoachService::from_config(&config());
    let deck = META_DECKS[0].cards;

    let request = coach.request(&deck).unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("Authorization"), Some("Bearer openai-key"));
    let body = request.body.unwrap();
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);

    let content = "Sure!\n{\"winCondition\": \"Hog Rider\", \"strengths\": [\"cycle\"], \
                   \"weaknesses\": [\"air\"], \"strategy\": \"Chip the tower.\", \"tips\": []}";
    let completion = json!({"choices": [{"message": {"content": content}}]}).to_string();
    let analysis = coach.handle_response(200, &completion).unwrap();
    assert_eq!(analysis.win_condition, "Hog Rider");

    let mut library = DeckLibrary::new();
    library.record_analysis(deck.iter().map(|s| s.to_string()).collect(), analysis.clone());
    assert_eq!(library.latest_analysis().unwrap().analysis, analysis);
}

#[test]
fn test_coach_unusable_reply_falls_back() {
    let coach = CoachService::from_config(&config());
    let completion = json!({"choices": [{"message": {"content": "no json here"}}]}).to_string();
    assert_eq!(coach.handle_response(200, &completion).unwrap(), DeckAnalysis::fallback());
}

#[test]
fn test_rankings_round_trip() {
    let service = RankingsService::from_config(&config().with_rankings_limit(8));
    assert_eq!(
        service.request().unwrap().url,
        "http://proxy.local/v1/locations/global/rankings/players"
    );

    let items: Vec<_> = (0..12)
        .map(|i| {
            json!({
                "name": format!("P{i}"),
                "tag": format!("#{i}"),
                "trophies": 9000 - i,
                "expLevel": 50,
                "previousRank": i + 2
            })
        })
        .collect();
    let body = json!({ "items": items }).to_string();

    let rows = service.handle_response(200, &body).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[7].rank, 8);
    assert_eq!(rows[7].name, "P7");
    assert!(rows.iter().all(|r| r.change == 1));
    assert!(rows.iter().all(|r| r.clan == "No Clan" && r.arena == "Unknown Arena"));
}

#[test]
fn test_upstream_errors_are_classified() {
    let service = RankingsService::from_config(&config());
    let err = service.handle_response(503, "maintenance").unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "Upstream API error: 503 - maintenance");
}
