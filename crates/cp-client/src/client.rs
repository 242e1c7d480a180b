/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP client for the CoinGecko simple-price endpoint.

use async_trait::async_trait;
use cp_core::{Config, Error, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::source::PriceSource;

/// Client for `GET /api/v3/simple/price`.
///
/// One request per lookup: no retry, no rate limiting and no caching. A
/// timeout is applied only when one is configured.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
  client: Client,
  base_url: String,
  timeout: Option<Duration>,
}

impl CoinGeckoClient {
  /// Create a client from configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .user_agent(concat!("cp-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Self::with_client(config, client)
  }

  /// Create a client that shares an existing `reqwest::Client`.
  pub fn with_client(config: &Config, client: Client) -> Result<Self> {
    Url::parse(&config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      timeout: config.timeout_secs.map(Duration::from_secs),
    })
  }

  /// Build the simple-price URL for a coin id.
  fn build_url(&self, coin_id: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, cp_core::SIMPLE_PRICE_PATH))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    url
      .query_pairs_mut()
      .append_pair("ids", coin_id)
      .append_pair("vs_currencies", cp_core::VS_CURRENCY);

    Ok(url)
  }

  /// Make the actual HTTP request
  async fn make_request(&self, url: Url) -> Result<Response> {
    let mut request = self.client.get(url);
    if let Some(timeout) = self.timeout {
      request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(|e| {
      if e.is_timeout() {
        Error::Http(format!("Request timed out: {}", e))
      } else {
        Error::Http(format!("Request failed: {}", e))
      }
    })?;

    let status = response.status();
    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Http(format!("CoinGecko API returned status: {}", status)))
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get the request timeout, if any
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
  #[instrument(skip(self))]
  async fn simple_price(&self, coin_id: &str) -> Result<Value> {
    let url = self.build_url(coin_id)?;
    debug!("Fetching URL: {}", url);

    let response = self.make_request(url).await?;
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<Value>(&text).map_err(|e| {
      warn!("Failed to parse CoinGecko response: {}", e);
      Error::Parse(format!(
        "Failed to parse response: {}. Response: {}",
        e,
        text.chars().take(200).collect::<String>()
      ))
    })
  }

  fn source_name(&self) -> &'static str {
    "coingecko"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn config_for(base_url: &str) -> Config {
    Config { base_url: base_url.to_string(), ..Config::default() }
  }

  #[test]
  fn test_build_url() {
    let client = CoinGeckoClient::new(&config_for("https://api.coingecko.com/")).unwrap();
    let url = client.build_url("bitcoin-cash").unwrap();

    assert_eq!(
      url.as_str(),
      "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin-cash&vs_currencies=usd"
    );
    assert_eq!(client.base_url(), "https://api.coingecko.com");
    assert!(client.timeout().is_none());
  }

  #[test]
  fn test_invalid_base_url() {
    let err = CoinGeckoClient::new(&config_for("::nope::")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[tokio::test]
  async fn test_simple_price_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v3/simple/price"))
      .and(query_param("ids", "bitcoin"))
      .and(query_param("vs_currencies", "usd"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bitcoin": {"usd": 50000}})))
      .expect(1)
      .mount(&server)
      .await;

    let client = CoinGeckoClient::new(&config_for(&server.uri())).unwrap();
    let body = client.simple_price("bitcoin").await.unwrap();

    assert_eq!(body["bitcoin"]["usd"], json!(50000));
  }

  #[tokio::test]
  async fn test_simple_price_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v3/simple/price"))
      .respond_with(
        ResponseTemplate::new(429).set_body_json(json!({"status": {"error_code": 429}})),
      )
      .mount(&server)
      .await;

    let client = CoinGeckoClient::new(&config_for(&server.uri())).unwrap();
    let err = client.simple_price("bitcoin").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(err.to_string().contains("429"));
  }

  #[tokio::test]
  async fn test_simple_price_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v3/simple/price"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
      .mount(&server)
      .await;

    let client = CoinGeckoClient::new(&config_for(&server.uri())).unwrap();
    let err = client.simple_price("bitcoin").await.unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
  }

  #[tokio::test]
  async fn test_simple_price_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v3/simple/price"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(json!({"bitcoin": {"usd": 1}}))
          .set_delay(Duration::from_secs(3)),
      )
      .mount(&server)
      .await;

    let config = Config { timeout_secs: Some(1), ..config_for(&server.uri()) };
    let client = CoinGeckoClient::new(&config).unwrap();
    let err = client.simple_price("bitcoin").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
  }

  #[tokio::test]
  async fn test_simple_price_connection_refused() {
    let client = CoinGeckoClient::new(&config_for("http://127.0.0.1:9")).unwrap();
    let err = client.simple_price("bitcoin").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
  }
}
