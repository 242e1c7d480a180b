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

//! Interfaces between the capability and the agent runtime that hosts it.

use async_trait::async_trait;
use cp_core::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::descriptor::CapabilityDescriptor;

/// Conversation operations provided by the host runtime.
#[async_trait]
pub trait ConversationHost: Send + Sync {
  /// Say `prompt` and wait for the user's reply.
  ///
  /// `Ok(None)` means the host gave up waiting for an answer.
  async fn prompt_and_wait(&self, prompt: &str) -> Result<Option<String>>;

  /// Speak `text`; resolves once it has been spoken.
  async fn speak(&self, text: &str) -> Result<()>;

  /// Hand control back to the host's default dialogue handling.
  fn resume_normal_flow(&self);
}

/// Everything one invocation needs, passed explicitly instead of being
/// stored on the capability.
#[derive(Clone)]
pub struct InvocationContext {
  pub host: Arc<dyn ConversationHost>,
  pub preset_coin: Option<String>,
}

impl InvocationContext {
  pub fn new(host: Arc<dyn ConversationHost>) -> Self {
    Self { host, preset_coin: None }
  }

  pub fn with_preset(mut self, coin: impl Into<String>) -> Self {
    self.preset_coin = Some(coin.into());
    self
  }
}

impl std::fmt::Debug for InvocationContext {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InvocationContext")
      .field("host", &"ConversationHost")
      .field("preset_coin", &self.preset_coin)
      .finish()
  }
}

/// A pluggable unit of conversational behaviour.
pub trait Capability: Send + Sync {
  /// Registration data: unique name and trigger phrases.
  fn descriptor(&self) -> &CapabilityDescriptor;

  /// Entry point used by the host on dispatch. The invocation runs on its
  /// own task; the handle resolves when control has been handed back.
  fn call(&self, ctx: InvocationContext) -> JoinHandle<Result<()>>;
}
