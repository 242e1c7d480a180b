//! # cp-core
//!
//! Shared types for the crypto price capability: the error type,
//! environment configuration, input normalization, the static alias table
//! and the spoken price reports.

pub mod aliases;
pub mod config;
pub mod error;
pub mod normalize;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use normalize::normalize;
pub use report::{PriceQuote, PriceReport};

/// Public CoinGecko API host; no key required for the simple-price endpoint
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// Path of the simple-price endpoint, relative to the base URL
pub const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

/// Quote currency requested from the provider
pub const VS_CURRENCY: &str = "usd";

/// Pause after speaking before the host flow resumes
pub const DEFAULT_SETTLE_MILLIS: u64 = 1000;
