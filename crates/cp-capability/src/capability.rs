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

//! The crypto price capability: ask for a coin, look it up, speak the price.

use cp_client::CoinGeckoClient;
use cp_core::{normalize, Config, PriceReport, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::descriptor::CapabilityDescriptor;
use crate::host::{Capability, ConversationHost, InvocationContext};
use crate::resolver::PriceResolver;

/// First question when no coin was given up front.
pub const FIRST_PROMPT: &str =
  "Which cryptocurrency would you like to check? For example, Bitcoin or Ethereum.";

/// Asked after a missing answer or a failed lookup.
pub const REPEAT_PROMPT: &str =
  "I'm sorry, I didn't get that. Please repeat the cryptocurrency name.";

/// Prompt loop policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
  /// Number of prompts before giving up; `None` keeps asking.
  pub max_attempts: Option<u32>,
  /// Pause after the report is spoken, before control returns to the host.
  pub settle_delay: Duration,
}

impl Default for FlowConfig {
  fn default() -> Self {
    Self { max_attempts: None, settle_delay: Duration::from_millis(cp_core::DEFAULT_SETTLE_MILLIS) }
  }
}

impl From<&Config> for FlowConfig {
  fn from(config: &Config) -> Self {
    Self {
      max_attempts: config.max_attempts,
      settle_delay: Duration::from_millis(config.settle_millis),
    }
  }
}

/// Speaks the current USD price of a cryptocurrency.
///
/// Holds only read-only state; everything tied to one conversation travels
/// in the [`InvocationContext`], so concurrent invocations never share
/// mutable fields.
#[derive(Debug, Clone)]
pub struct CryptoPriceCapability {
  descriptor: CapabilityDescriptor,
  resolver: PriceResolver,
  flow: FlowConfig,
}

impl CryptoPriceCapability {
  pub fn new(descriptor: CapabilityDescriptor, resolver: PriceResolver, flow: FlowConfig) -> Self {
    Self { descriptor, resolver, flow }
  }

  /// Build the capability against the live CoinGecko API.
  ///
  /// The descriptor is read from `config.capability_config` when set,
  /// otherwise the bundled one is used.
  pub fn from_config(config: &Config) -> Result<Self> {
    let descriptor = match &config.capability_config {
      Some(path) => CapabilityDescriptor::load(path)?,
      None => CapabilityDescriptor::bundled()?,
    };
    let client = CoinGeckoClient::new(config)?;
    let resolver = PriceResolver::new(Arc::new(client));

    Ok(Self::new(descriptor, resolver, FlowConfig::from(config)))
  }

  pub fn resolver(&self) -> &PriceResolver {
    &self.resolver
  }

  pub fn flow(&self) -> &FlowConfig {
    &self.flow
  }

  /// Run one invocation to completion and return the report that was spoken.
  ///
  /// Control is handed back to the host whether or not the conversation
  /// succeeded; host failures are returned after that.
  pub async fn run(&self, ctx: InvocationContext) -> Result<PriceReport> {
    let outcome = self.converse(&ctx).await;
    if let Err(e) = &outcome {
      error!("{} invocation aborted: {}", self.descriptor.unique_name, e);
    }
    ctx.host.resume_normal_flow();
    outcome
  }

  async fn converse(&self, ctx: &InvocationContext) -> Result<PriceReport> {
    let preset = ctx.preset_coin.as_deref().map(normalize).filter(|coin| !coin.is_empty());

    let report = match preset {
      Some(coin) => self.check_preset(&coin).await,
      None => self.ask_until_valid(ctx.host.as_ref()).await?,
    };

    ctx.host.speak(&report.message()).await?;
    if !self.flow.settle_delay.is_zero() {
      tokio::time::sleep(self.flow.settle_delay).await;
    }
    Ok(report)
  }

  async fn check_preset(&self, coin: &str) -> PriceReport {
    debug!("Checking preset coin: {}", coin);
    match self.resolver.resolve(coin).await {
      Ok(report) => report,
      Err(report) => {
        info!("Preset coin {} failed: {}", coin, report);
        PriceReport::IncorrectName
      }
    }
  }

  /// Prompt until a lookup succeeds or the attempt budget runs out.
  ///
  /// A missing or unusable answer and an unknown coin both lead to the
  /// repeat prompt. Fetch failures are announced before re-prompting.
  async fn ask_until_valid(&self, host: &dyn ConversationHost) -> Result<PriceReport> {
    let mut prompt = FIRST_PROMPT;
    let mut attempts: u32 = 0;

    loop {
      if let Some(max) = self.flow.max_attempts {
        if attempts >= max {
          warn!("Giving up after {} attempts", attempts);
          return Ok(PriceReport::IncorrectName);
        }
      }
      attempts += 1;

      let answer = host.prompt_and_wait(prompt).await?;
      prompt = REPEAT_PROMPT;

      let normalized = answer.as_deref().map(normalize).unwrap_or_default();
      if normalized.is_empty() {
        debug!("No usable answer on attempt {}", attempts);
        continue;
      }
      debug!("User transcription after normalization: {}", normalized);

      match self.resolver.resolve(&normalized).await {
        Ok(report) => return Ok(report),
        Err(PriceReport::FetchFailed) => {
          host.speak(&PriceReport::FetchFailed.message()).await?;
        }
        Err(report) => {
          debug!("Lookup failed on attempt {}: {}", attempts, report);
        }
      }
    }
  }
}

impl Capability for CryptoPriceCapability {
  fn descriptor(&self) -> &CapabilityDescriptor {
    &self.descriptor
  }

  fn call(&self, ctx: InvocationContext) -> JoinHandle<Result<()>> {
    let capability = self.clone();
    tokio::spawn(async move { capability.run(ctx).await.map(|_| ()) })
  }
}
