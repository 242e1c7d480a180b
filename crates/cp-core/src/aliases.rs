//! Static mapping from normalized names to provider coin identifiers.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Read-only alias table, built once on first use.
///
/// Keys are normalized inputs (see [`crate::normalize`]); values are the ids
/// the CoinGecko simple-price endpoint expects.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
  HashMap::from([
    ("bitcoin", "bitcoin"),
    ("ethereum", "ethereum"),
    ("litecoin", "litecoin"),
    // Tickers
    ("btc", "bitcoin"),
    ("eth", "ethereum"),
    ("ltc", "litecoin"),
    ("sol", "solana"),
    ("doge", "dogecoin"),
    ("xrp", "ripple"),
    ("ada", "cardano"),
    ("dot", "polkadot"),
    ("bch", "bitcoin-cash"),
    // Multi-word names collapse during normalization
    ("bitcoincash", "bitcoin-cash"),
    ("ethereumclassic", "ethereum-classic"),
    ("shibainu", "shiba-inu"),
    ("binancecoin", "binancecoin"),
    ("bnb", "binancecoin"),
  ])
});

/// Provider identifier for a normalized key.
///
/// Unknown keys pass through unchanged so they are still attempted verbatim.
pub fn provider_id(normalized: &str) -> &str {
  ALIASES.get(normalized).copied().unwrap_or(normalized)
}

/// Whether the key has an explicit entry in the alias table.
pub fn is_known(normalized: &str) -> bool {
  ALIASES.contains_key(normalized)
}
