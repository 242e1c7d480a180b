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

//! Abstraction over the outbound price lookup.

use async_trait::async_trait;
use cp_core::Result;
use serde_json::Value;

/// A source of USD spot prices.
///
/// The resolver only needs the raw decoded body so that it can tell a missing
/// coin apart from a transport failure. Implement this trait to back the
/// capability with something other than the live CoinGecko endpoint.
#[async_trait]
pub trait PriceSource: Send + Sync {
  /// Fetch the simple-price document for one provider coin id.
  ///
  /// Expected shape on success: `{ "<coin_id>": { "usd": <number> } }`.
  async fn simple_price(&self, coin_id: &str) -> Result<Value>;

  /// Name used in log lines.
  fn source_name(&self) -> &'static str;
}
