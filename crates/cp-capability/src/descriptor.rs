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

//! Capability registration data.

use cp_core::{normalize, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const BUNDLED_DESCRIPTOR: &str = include_str!("../config.json");

/// Identifier and trigger phrases a capability registers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
  pub unique_name: String,
  pub matching_hotwords: Vec<String>,
}

impl CapabilityDescriptor {
  /// Descriptor shipped with this crate.
  pub fn bundled() -> Result<Self> {
    Self::from_json(BUNDLED_DESCRIPTOR)
  }

  /// Parse and validate a descriptor document.
  pub fn from_json(json: &str) -> Result<Self> {
    let descriptor: CapabilityDescriptor = serde_json::from_str(json)?;
    descriptor.validate()?;
    Ok(descriptor)
  }

  /// Read a descriptor from disk.
  pub fn load(path: &Path) -> Result<Self> {
    debug!("Loading capability descriptor from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    Self::from_json(&json)
  }

  fn validate(&self) -> Result<()> {
    if self.unique_name.trim().is_empty() {
      return Err(Error::Descriptor("unique_name must not be empty".to_string()));
    }
    if self.matching_hotwords.iter().all(|h| normalize(h).is_empty()) {
      return Err(Error::Descriptor(format!(
        "{} has no usable matching_hotwords",
        self.unique_name
      )));
    }
    Ok(())
  }

  /// Whether any hotword occurs in the utterance, ignoring case, spacing and
  /// punctuation.
  pub fn matches(&self, utterance: &str) -> bool {
    let utterance = normalize(utterance);
    self
      .matching_hotwords
      .iter()
      .map(|h| normalize(h))
      .any(|h| !h.is_empty() && utterance.contains(&h))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundled_descriptor() {
    let descriptor = CapabilityDescriptor::bundled().unwrap();
    assert_eq!(descriptor.unique_name, "crypto_price_checker");
    assert!(descriptor.matching_hotwords.contains(&"crypto price".to_string()));
  }

  #[test]
  fn test_matches_ignores_case_and_punctuation() {
    let descriptor = CapabilityDescriptor::bundled().unwrap();
    assert!(descriptor.matches("Hey, what's the Crypto-Price today?"));
    assert!(descriptor.matches("BITCOIN PRICE"));
    assert!(!descriptor.matches("what's the weather like"));
  }

  #[test]
  fn test_rejects_empty_name() {
    let err = CapabilityDescriptor::from_json(r#"{"unique_name": " ", "matching_hotwords": ["x"]}"#)
      .unwrap_err();
    assert!(matches!(err, Error::Descriptor(_)));
  }

  #[test]
  fn test_rejects_missing_hotwords() {
    let err =
      CapabilityDescriptor::from_json(r#"{"unique_name": "a", "matching_hotwords": ["?!"]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Descriptor(_)));

    let err = CapabilityDescriptor::from_json(r#"{"unique_name": "a"}"#).unwrap_err();
    assert!(matches!(err, Error::Serde(_)));
  }

  #[test]
  fn test_load_missing_file() {
    let err = CapabilityDescriptor::load(Path::new("/nonexistent/capability.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
  }
}
