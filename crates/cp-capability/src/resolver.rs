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

//! Turns a normalized coin name into a spoken price report.

use cp_client::PriceSource;
use cp_core::{aliases, normalize, PriceQuote, PriceReport};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Resolves normalized names to price reports through a [`PriceSource`].
///
/// Stateless apart from the shared source, so one resolver can serve any
/// number of concurrent invocations.
#[derive(Clone)]
pub struct PriceResolver {
  source: Arc<dyn PriceSource>,
}

impl PriceResolver {
  pub fn new(source: Arc<dyn PriceSource>) -> Self {
    Self { source }
  }

  /// Normalize raw text, then resolve it.
  pub async fn fetch(&self, raw: &str) -> Result<PriceReport, PriceReport> {
    let normalized = normalize(raw);
    debug!("Normalized coin: {}", normalized);
    self.resolve(&normalized).await
  }

  /// Look up the USD price for an already normalized name.
  ///
  /// `Ok` always carries [`PriceReport::Quoted`]. `Err` carries
  /// [`PriceReport::NotFound`] when the provider answered without a USD price
  /// for the coin, and [`PriceReport::FetchFailed`] for transport errors,
  /// malformed bodies and non-numeric prices. Nothing is retried.
  pub async fn resolve(&self, normalized: &str) -> Result<PriceReport, PriceReport> {
    let coin_id = aliases::provider_id(normalized);
    if !aliases::is_known(normalized) {
      debug!("No alias for {}, trying it verbatim", normalized);
    }

    let body = match self.source.simple_price(coin_id).await {
      Ok(body) => body,
      Err(e) => {
        error!("Price lookup for {} via {} failed: {}", coin_id, self.source.source_name(), e);
        return Err(PriceReport::FetchFailed);
      }
    };
    debug!("API response: {}", body);

    let Some(entry) = body.get(coin_id) else {
      info!("No entry for {} in {} response", coin_id, self.source.source_name());
      return Err(PriceReport::not_found(normalized));
    };

    let Some(fields) = entry.as_object() else {
      warn!("Unexpected entry shape for {}: {}", coin_id, entry);
      return Err(PriceReport::FetchFailed);
    };

    match fields.get(cp_core::VS_CURRENCY) {
      Some(Value::Number(price)) => {
        let quote = PriceQuote::new(coin_id, price.clone());
        info!(
          "Resolved {} to {} USD at {}",
          quote.coin_id,
          quote.usd_price,
          quote.retrieved_at.to_rfc3339()
        );
        Ok(PriceReport::quoted(normalized, quote))
      }
      Some(other) => {
        warn!("Non-numeric USD price for {}: {}", coin_id, other);
        Err(PriceReport::FetchFailed)
      }
      None => {
        info!("No USD price for {} in {} response", coin_id, self.source.source_name());
        Err(PriceReport::not_found(normalized))
      }
    }
  }
}

impl std::fmt::Debug for PriceResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PriceResolver").field("source", &self.source.source_name()).finish()
  }
}
