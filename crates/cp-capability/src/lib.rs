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

//! # cp-capability
//!
//! A voice-assistant capability that speaks the current USD price of a
//! cryptocurrency. The host runtime owns speech I/O and dispatch; this
//! crate supplies the conversation flow and the price resolution.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cp_capability::prelude::*;
//!
//! let capability = Arc::new(CryptoPriceCapability::from_config(&Config::from_env()?)?);
//! let mut registry = CapabilityRegistry::new();
//! registry.register(capability)?;
//!
//! if let Some(capability) = registry.dispatch("what's the bitcoin price") {
//!     capability.call(InvocationContext::new(host)).await??;
//! }
//! ```

pub mod capability;
pub mod descriptor;
pub mod host;
pub mod registry;
pub mod resolver;

pub use capability::{CryptoPriceCapability, FlowConfig, FIRST_PROMPT, REPEAT_PROMPT};
pub use descriptor::CapabilityDescriptor;
pub use host::{Capability, ConversationHost, InvocationContext};
pub use registry::CapabilityRegistry;
pub use resolver::PriceResolver;

pub mod prelude {
  pub use crate::{
    Capability, CapabilityDescriptor, CapabilityRegistry, ConversationHost, CryptoPriceCapability,
    FlowConfig, InvocationContext, PriceResolver,
  };
  pub use cp_core::{Config, PriceReport};
  pub use std::sync::Arc;
}
