//! Elixir cost lookup.
//!
//! Costs come from a fixed table. A card missing from the table costs
//! `DEFAULT_ELIXIR_COST`; that is a simplification, not a data error.

use rustc_hash::FxHashMap;

/// Cost assumed for any card not in the table.
pub const DEFAULT_ELIXIR_COST: u8 = 4;

const BUILTIN_COSTS: &[(&str, u8)] = &[
    ("Skeletons", 1),
    ("Ice Spirit", 1),
    ("Bats", 2),
    ("Zap", 2),
    ("Log", 2),
    ("Knight", 3),
    ("Archers", 3),
    ("Cannon", 3),
    ("Musketeer", 4),
    ("Fireball", 4),
    ("Hog Rider", 4),
    ("Giant", 5),
    ("Wizard", 5),
    ("P.E.K.K.A", 7),
    ("Golem", 8),
];

/// Name to elixir cost table.
///
/// Lookups trim the name and ignore case.
///
/// ## Example
///
/// ```
/// use lonorix::cards::ElixirTable;
///
/// let table = ElixirTable::builtin();
/// assert_eq!(table.cost("Knight"), 3);
/// assert_eq!(table.cost("golem"), 8);
/// assert_eq!(table.cost("TotallyUnknownCard"), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElixirTable {
    costs: FxHashMap<String, u8>,
}

impl ElixirTable {
    /// Create an empty table. Every lookup returns the default cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the deck coach.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for &(name, cost) in BUILTIN_COSTS {
            table.insert(name, cost);
        }
        table
    }

    /// Add or replace a cost.
    pub fn insert(&mut self, name: &str, cost: u8) {
        self.costs.insert(Self::key(name), cost);
    }

    /// Cost of a card, falling back to `DEFAULT_ELIXIR_COST`.
    #[must_use]
    pub fn cost(&self, name: &str) -> u8 {
        self.costs
            .get(&Self::key(name))
            .copied()
            .unwrap_or(DEFAULT_ELIXIR_COST)
    }

    /// Check if a card has an explicit cost.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.costs.contains_key(&Self::key(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
