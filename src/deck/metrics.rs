//! Deck-level numbers: average elixir cost.

use std::sync::OnceLock;

use crate::cards::ElixirTable;

fn builtin_table() -> &'static ElixirTable {
    static TABLE: OnceLock<ElixirTable> = OnceLock::new();
    TABLE.get_or_init(ElixirTable::builtin)
}

/// Average elixir cost using the built-in cost table.
///
/// Blank entries are skipped; an all-blank or empty list averages to 0.
/// The result is rounded half-up to one decimal place.
///
/// ```
/// use lonorix::deck::average_elixir;
///
/// assert_eq!(average_elixir(&["Knight", "Giant"]), 4.0);
/// assert_eq!(average_elixir(&["TotallyUnknownCard"]), 4.0);
/// assert_eq!(average_elixir::<&str>(&[]), 0.0);
/// ```
#[must_use]
pub fn average_elixir<S: AsRef<str>>(names: &[S]) -> f64 {
    average_elixir_with(names, builtin_table())
}

/// Average elixir cost against a specific table.
#[must_use]
pub fn average_elixir_with<S: AsRef<str>>(names: &[S], table: &ElixirTable) -> f64 {
    let (sum, count) = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.trim().is_empty())
        .fold((0u32, 0u32), |(sum, count), name| {
            (sum + u32::from(table.cost(name)), count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    round_tenth(f64::from(sum) / f64::from(count))
}

/// Round half-up to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
