//! Card records: rarity tiers, owned cards, and elixir costs.
//!
//! ## Key Types
//!
//! - `Rarity`: Closed set of tiers; unknown values normalize to `Common`
//! - `Card`: One owned card (name, level, max level, rarity)
//! - `ElixirTable`: Fixed cost lookup with a default for unknown cards

pub mod card;
pub mod elixir;
pub mod rarity;

pub use card::{Card, CardRecord};
pub use elixir::{ElixirTable, DEFAULT_ELIXIR_COST};
pub use rarity::Rarity;
