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

//! Registration and hotword dispatch of capabilities.

use cp_core::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::host::Capability;

/// Capabilities known to a host, in registration order.
#[derive(Default)]
pub struct CapabilityRegistry {
  capabilities: Vec<Arc<dyn Capability>>,
}

impl CapabilityRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a capability once under its `unique_name`.
  pub fn register(&mut self, capability: Arc<dyn Capability>) -> Result<()> {
    let name = capability.descriptor().unique_name.clone();
    if self.get(&name).is_some() {
      return Err(Error::Descriptor(format!("{} is already registered", name)));
    }
    info!(
      "Registered capability {} ({} hotwords)",
      name,
      capability.descriptor().matching_hotwords.len()
    );
    self.capabilities.push(capability);
    Ok(())
  }

  pub fn get(&self, unique_name: &str) -> Option<Arc<dyn Capability>> {
    self.capabilities.iter().find(|c| c.descriptor().unique_name == unique_name).cloned()
  }

  /// First capability whose hotwords occur in the utterance.
  pub fn dispatch(&self, utterance: &str) -> Option<Arc<dyn Capability>> {
    let found = self.capabilities.iter().find(|c| c.descriptor().matches(utterance)).cloned();
    if let Some(capability) = &found {
      debug!("Utterance matched {}", capability.descriptor().unique_name);
    }
    found
  }

  pub fn names(&self) -> Vec<&str> {
    self.capabilities.iter().map(|c| c.descriptor().unique_name.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.capabilities.len()
  }

  pub fn is_empty(&self) -> bool {
    self.capabilities.is_empty()
  }
}
