//! Deck coach tests.
//!
//! These tests cover the deck editor end to end:
//! - Average elixir with known, unknown and blank slots
//! - Upgrade priority tiers and the upgrade list
//! - The 8-card gate in front of the analysis service
//! - Randomized decks and the saved-deck library

use lonorix::cards::{Card, ElixirTable, Rarity};
use lonorix::deck::{
    average_elixir, average_elixir_with, find_meta_deck, priority_of, upgrade_priorities,
    DeckLibrary, DeckReadiness, DeckRng, DeckSlots, Priority, DECK_SIZE, INCOMPLETE_DECK_MESSAGE,
    META_DECKS, POPULAR_CARDS,
};
use lonorix::config::AppConfig;
use lonorix::error::Error;
use lonorix::services::coach::{CoachService, DeckAnalysis};
use pretty_assertions::assert_eq;

#[test]
fn test_average_elixir() {
    assert_eq!(average_elixir(&["Knight", "Giant"]), 4.0);
    assert_eq!(average_elixir(&["Skeletons", "Golem"]), 4.5);
    assert_eq!(average_elixir(&["Ice Spirit", "Bats", "Zap", "Log"]), 1.8);
}

/// Unknown names cost 4, blank slots are skipped.
#[test]
fn test_average_elixir_defaults() {
    assert_eq!(average_elixir(&["Mystery Card"]), 4.0);
    assert_eq!(average_elixir(&["Golem", "", "  "]), 8.0);
    assert_eq!(average_elixir(&["", ""]), 0.0);
    assert_eq!(average_elixir::<&str>(&[]), 0.0);
}

#[test]
fn test_average_elixir_custom_table() {
    let mut table = ElixirTable::new();
    table.insert("Mirror", 1);
    assert_eq!(average_elixir_with(&["Mirror", "Anything"], &table), 2.5);
}

#[test]
fn test_meta_deck_averages() {
    let hog = find_meta_deck("hog cycle").unwrap();
    assert_eq!(hog.average_elixir(), 2.9);

    for deck in &META_DECKS {
        assert_eq!(deck.to_slots().readiness(), DeckReadiness::Ready, "{}", deck.name);
    }
}

#[test]
fn test_priority_boundaries() {
    assert_eq!(priority_of(29.999), Priority::High);
    assert_eq!(priority_of(30.0), Priority::Medium);
    assert_eq!(priority_of(69.999), Priority::Medium);
    assert_eq!(priority_of(70.0), Priority::Low);
    assert_eq!(priority_of(100.0), Priority::Low);
}

#[test]
fn test_upgrade_list() {
    let cards: Vec<Card> = (1..=12)
        .map(|level| Card::new(format!("Card {level}"), level, 14, Rarity::Common))
        .collect();

    let list = upgrade_priorities(&cards, 10);
    assert_eq!(list.len(), 10);
    assert_eq!(list[0].card.name, "Card 1");
    assert_eq!(list[0].priority, Priority::High);
    assert_eq!(list[9].card.name, "Card 10");
    assert_eq!(list[9].priority, Priority::Low);

    // 4/14 is 28.6%, 5/14 is 35.7%
    assert_eq!(list[3].priority, Priority::High);
    assert_eq!(list[4].priority, Priority::Medium);
}

#[test]
fn test_upgrade_list_short_collection() {
    let cards = vec![Card::new("Knight", 14, 14, Rarity::Common)];
    let list = upgrade_priorities(&cards, 10);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].priority, Priority::Low);
}

/// Seven filled slots never reach the analysis service.
#[test]
fn test_gate_blocks_incomplete_deck() {
    let mut deck = META_DECKS[1].to_slots();
    deck.clear_slot(7).unwrap();

    assert_eq!(deck.readiness(), DeckReadiness::Incomplete { filled: 7 });
    assert_eq!(deck.submission(), Err(INCOMPLETE_DECK_MESSAGE));

    let coach = CoachService::from_config(&AppConfig::default().with_openai_api_key("sk"));
    let slots: Vec<&str> = deck.slots().iter().map(String::as_str).collect();
    assert!(matches!(coach.request(&slots), Err(Error::InvalidDeck { filled: 7 })));
}

/// A complete deck is forwarded unmodified, in slot order.
#[test]
fn test_gate_passes_full_deck() {
    let deck = META_DECKS[0].to_slots();
    let names = deck.submission().unwrap();
    assert_eq!(names.len(), DECK_SIZE);
    assert_eq!(names, META_DECKS[0].cards);

    let coach = CoachService::from_config(&AppConfig::default());
    let body = coach.request_body(&names).unwrap();
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.ends_with(&META_DECKS[0].cards.join(", ")));
}

#[test]
fn test_randomized_deck() {
    let mut rng = DeckRng::new(2024);
    let deck = DeckSlots::randomized(&POPULAR_CARDS, &mut rng);

    assert!(deck.readiness().is_ready());
    let filled = deck.filled();
    for (i, name) in filled.iter().enumerate() {
        assert!(POPULAR_CARDS.contains(name));
        assert!(!filled[i + 1..].contains(name), "duplicate {name}");
    }
}

#[test]
fn test_fill_slot_randomly() {
    let pool = ["Zap", "Log", "Knight"];
    let mut rng = DeckRng::new(1);
    let mut deck = DeckSlots::from_names(["Zap", "Log"]);

    assert!(deck.fill_slot_randomly(2, &pool, &mut rng).unwrap());
    assert_eq!(deck.get(2), Some("Knight"));

    assert!(!deck.fill_slot_randomly(3, &pool, &mut rng).unwrap());
    assert_eq!(deck.get(3), Some(""));

    assert!(matches!(
        deck.fill_slot_randomly(8, &pool, &mut rng),
        Err(Error::SlotOutOfRange { index: 8 })
    ));
}

#[test]
fn test_library_save_rate_remove() {
    let mut library = DeckLibrary::new();
    let deck = META_DECKS[2].to_slots();

    assert!(matches!(library.save("  ", &deck, None, 0), Err(Error::InvalidDeckName)));

    let first = library.save("Loon", &deck, Some(DeckAnalysis::fallback()), 100).unwrap();
    let second = library.save(" Loon 2 ", &deck, None, 200).unwrap();
    assert_ne!(first, second);
    assert_eq!(library.get(second).unwrap().name, "Loon 2");

    library.rate(first, 9).unwrap();
    assert_eq!(library.get(first).unwrap().rating, Some(5));
    library.rate(first, 0).unwrap();
    assert_eq!(library.get(first).unwrap().rating, Some(1));

    let removed = library.remove(first).unwrap();
    assert_eq!(removed.created_at, 100);
    assert_eq!(library.len(), 1);
    assert!(matches!(library.rate(first, 3), Err(Error::DeckNotFound { .. })));
}

#[test]
fn test_library_history_is_bounded() {
    let mut library = DeckLibrary::with_history_limit(3);
    for i in 0..5 {
        let mut analysis = DeckAnalysis::fallback();
        analysis.strategy = format!("plan {i}");
        library.record_analysis(vec![format!("Card {i}")], analysis);
    }

    let strategies: Vec<_> = library.history().map(|r| r.analysis.strategy.clone()).collect();
    assert_eq!(strategies, ["plan 2", "plan 3", "plan 4"]);
    assert_eq!(library.latest_analysis().unwrap().deck, ["Card 4"]);
}
