//! lonorix CLI
//!
//! Runs the collection engine and deck coach over saved API responses.
//! Player, completion and rankings payloads are read from a file, or from
//! stdin when the path is `-`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lonorix::collection::{
    rarity_progress, select_and_order, CollectionStats, FilterCriteria, RarityFilter, SortKey,
};
use lonorix::config::AppConfig;
use lonorix::deck::{
    average_elixir, category_cards, upgrade_priorities, DeckReadiness, DeckRng, DeckSlots,
    CARD_CATEGORIES, META_DECKS, POPULAR_CARDS,
};
use lonorix::services::coach::CoachService;
use lonorix::services::player::PlayerRecord;
use lonorix::services::rankings::RankingsService;

#[derive(Parser)]
#[command(name = "lonorix")]
#[command(about = "Card collection planner and deck coach", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a player's cards
    Collection {
        /// Player JSON file, `-` for stdin. Uses the sample player when omitted.
        player: Option<PathBuf>,

        /// Case-insensitive name substring
        #[arg(long, default_value = "")]
        search: String,

        /// all, common, rare, epic or legendary
        #[arg(long, default_value = "all")]
        rarity: RarityFilter,

        /// Lowest level shown
        #[arg(long, default_value_t = 1)]
        min_level: u32,

        /// Hide cards at max level
        #[arg(long)]
        hide_maxed: bool,

        /// name, level, rarity or progress
        #[arg(long, default_value = "progress")]
        sort: SortKey,
    },

    /// Collection statistics
    Stats {
        /// Player JSON file, `-` for stdin. Uses the sample player when omitted.
        player: Option<PathBuf>,
    },

    /// Cards most in need of an upgrade
    Upgrades {
        /// Player JSON file, `-` for stdin. Uses the sample player when omitted.
        player: Option<PathBuf>,

        /// Number of cards listed
        #[arg(long, env = "LONORIX_UPGRADE_LIMIT")]
        limit: Option<usize>,
    },

    /// Average elixir and readiness of a deck
    Deck {
        /// Card names, one per slot
        cards: Vec<String>,

        /// Quick-add cards from a category (e.g. "Spells") into blank slots
        #[arg(long)]
        fill_from: Option<String>,

        /// Print the analysis request body instead
        #[arg(long)]
        request: bool,
    },

    /// Parse a chat-completion response into a deck analysis
    Analysis {
        /// Response body file, `-` for stdin
        response: PathBuf,

        /// HTTP status the response came with
        #[arg(long, default_value_t = 200)]
        status: u16,
    },

    /// Transform a global rankings response
    Rankings {
        /// Response body file, `-` for stdin
        response: PathBuf,

        /// HTTP status the response came with
        #[arg(long, default_value_t = 200)]
        status: u16,

        /// Number of players listed
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the meta decks
    Meta,

    /// Draw a random deck from the popular cards
    RandomDeck {
        /// RNG seed, random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Collection {
            player,
            search,
            rarity,
            min_level,
            hide_maxed,
            sort,
        } => {
            let record = load_player(player.as_deref())?;
            let mut criteria = FilterCriteria::default()
                .with_search(search)
                .with_rarity_filter(rarity)
                .with_min_level(min_level)
                .sorted_by(sort);
            if hide_maxed {
                criteria = criteria.hide_maxed();
            }

            let cards = select_and_order(&record.cards, &criteria);
            for card in &cards {
                println!(
                    "{:<20} {:>2}/{:<2} {:<10} {:>5.1}%",
                    card.name,
                    card.level,
                    card.max_level,
                    card.rarity,
                    card.progress()
                );
            }
            println!("{} of {} cards", cards.len(), record.cards.len());
        }

        Commands::Stats { player } => {
            let record = load_player(player.as_deref())?;
            let stats = CollectionStats::compute(&record.cards);

            println!("Player:     {} ({})", record.name, record.tag);
            println!("Cards:      {}", stats.total);
            println!("Maxed:      {} ({}%)", stats.maxed, stats.completion_percent);
            println!("Remaining:  {}", stats.remaining());
            println!("Avg level:  {}%", stats.average_progress_percent);
            for progress in rarity_progress(&record.cards) {
                println!(
                    "  {:<10} {:>3}/{:<3} maxed ({}%)",
                    progress.rarity, progress.maxed, progress.total, progress.percent
                );
            }
            if let Some(rarity) = stats.focus_rarity() {
                println!("Focus:      {rarity}");
            }
        }

        Commands::Upgrades { player, limit } => {
            let record = load_player(player.as_deref())?;
            let limit = limit.unwrap_or(config.upgrade_list_len);
            for (i, entry) in upgrade_priorities(&record.cards, limit).iter().enumerate() {
                println!(
                    "{:>2}. {:<20} {:>5.1}%  {}",
                    i + 1,
                    entry.card.name,
                    entry.progress,
                    entry.priority
                );
            }
        }

        Commands::Deck {
            mut cards,
            fill_from,
            request,
        } => {
            if let Some(category) = fill_from {
                let pool = category_cards(&category)
                    .with_context(|| format!("unknown card category: {category}"))?;
                let mut deck = DeckSlots::from_names(cards.iter().cloned());
                for card in pool {
                    deck.add_to_first_empty(card);
                }
                cards = deck.slots().to_vec();
            }

            if request {
                let body = CoachService::from_config(&config).request_body(&cards)?;
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            let deck = DeckSlots::from_names(cards.iter().cloned());
            println!("Deck:        {}", deck.share_string());
            println!("Avg elixir:  {:.1}", average_elixir(&cards));
            match DeckReadiness::of(&cards).message() {
                None => println!("Ready for analysis"),
                Some(message) => println!("{message}"),
            }
        }

        Commands::Analysis { response, status } => {
            let body = read_input(&response)?;
            let analysis = CoachService::from_config(&config).handle_response(status, &body)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }

        Commands::Rankings {
            response,
            status,
            limit,
        } => {
            let body = read_input(&response)?;
            let config = match limit {
                Some(limit) => config.with_rankings_limit(limit),
                None => config,
            };
            let players = RankingsService::from_config(&config).handle_response(status, &body)?;
            for p in &players {
                let change = match p.change {
                    0 => "-".to_string(),
                    c if c > 0 => format!("+{c}"),
                    c => c.to_string(),
                };
                println!(
                    "{:>2}. {:<20} {:>5}  {:>4}  lvl {:<3} {} [{}]  {}",
                    p.rank, p.name, p.trophies, change, p.level, p.clan, p.clan_tag, p.arena
                );
            }
        }

        Commands::Meta => {
            for deck in &META_DECKS {
                println!(
                    "{:<20} {:.1} elixir  {}% win  rating {:.1}",
                    deck.name,
                    deck.average_elixir(),
                    deck.win_rate,
                    deck.rating
                );
                println!("    {}", deck.cards.join(", "));
            }
            println!();
            for (category, cards) in &CARD_CATEGORIES {
                println!("{:<15} {}", category, cards.join(", "));
            }
        }

        Commands::RandomDeck { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = DeckRng::new(seed);
            let deck = DeckSlots::randomized(&POPULAR_CARDS, &mut rng);
            println!("{}", deck.share_string());
            println!("Avg elixir: {:.1} (seed {seed})", average_elixir(deck.slots()));
        }
    }

    Ok(())
}

fn load_player(path: Option<&Path>) -> Result<PlayerRecord> {
    match path {
        Some(path) => {
            let body = read_input(path)?;
            PlayerRecord::from_json(&body).with_context(|| format!("parsing player from {}", path.display()))
        }
        None => {
            tracing::warn!("no player file given, using the sample player");
            Ok(PlayerRecord::sample("#SAMPLE"))
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("reading stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
