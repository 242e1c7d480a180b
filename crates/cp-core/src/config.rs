//! Configuration management for the crypto price capability

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration struct for the price capability
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the CoinGecko-compatible price API
  pub base_url: String,

  /// Request timeout in seconds. `None` leaves the request unbounded.
  pub timeout_secs: Option<u64>,

  /// Maximum number of prompts in the ask-until-valid loop. `None` is unbounded.
  pub max_attempts: Option<u32>,

  /// Pause between speaking the report and resuming the host flow
  pub settle_millis: u64,

  /// Capability descriptor file; the bundled descriptor is used when unset
  pub capability_config: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::COINGECKO_BASE_URL.to_string(),
      timeout_secs: None,
      max_attempts: None,
      settle_millis: crate::DEFAULT_SETTLE_MILLIS,
      capability_config: None,
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = lookup("CP_BASE_URL").unwrap_or_else(|| crate::COINGECKO_BASE_URL.to_string());
    url::Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid CP_BASE_URL {}: {}", base_url, e)))?;

    let timeout_secs = parse_optional(&lookup, "CP_TIMEOUT_SECS")?;

    let max_attempts: Option<u32> = parse_optional(&lookup, "CP_MAX_ATTEMPTS")?;
    if max_attempts == Some(0) {
      return Err(Error::Config("CP_MAX_ATTEMPTS must be at least 1".to_string()));
    }

    let settle_millis =
      parse_optional(&lookup, "CP_SETTLE_MILLIS")?.unwrap_or(crate::DEFAULT_SETTLE_MILLIS);

    let capability_config = lookup("CP_CAPABILITY_CONFIG").map(PathBuf::from);

    Ok(Config { base_url, timeout_secs, max_attempts, settle_millis, capability_config })
  }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(key) {
    Some(raw) if !raw.trim().is_empty() => {
      raw.trim().parse().map(Some).map_err(|_| Error::Config(format!("Invalid {}", key)))
    }
    _ => Ok(None),
  }
}
