//! Price quotes and the spoken reports built from them.

use chrono::{DateTime, Utc};
use serde_json::Number;
use std::fmt;

/// Spoken when a preset coin cannot be priced or the user runs out of attempts.
pub const INCORRECT_NAME_MESSAGE: &str = "Incorrect cryptocurrency name, please try again.";

/// Spoken on any transport or decoding failure.
pub const FETCH_FAILED_MESSAGE: &str =
  "An error occurred while fetching the cryptocurrency price. Please try again later.";

/// USD spot price for one provider coin id. Lives for a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
  pub coin_id: String,
  pub usd_price: Number,
  pub retrieved_at: DateTime<Utc>,
}

impl PriceQuote {
  pub fn new(coin_id: impl Into<String>, usd_price: Number) -> Self {
    Self { coin_id: coin_id.into(), usd_price, retrieved_at: Utc::now() }
  }
}

/// Outcome of a price lookup, rendered as the sentence handed to speech output.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceReport {
  /// The provider returned a USD price.
  Quoted { display_name: String, quote: PriceQuote },
  /// The provider answered but had no USD price for the coin.
  NotFound { display_name: String },
  /// Transport, status or decoding failure.
  FetchFailed,
  /// A preset name failed, or the prompt loop gave up.
  IncorrectName,
}

impl PriceReport {
  pub fn quoted(normalized: &str, quote: PriceQuote) -> Self {
    PriceReport::Quoted { display_name: capitalize(normalized), quote }
  }

  pub fn not_found(normalized: &str) -> Self {
    PriceReport::NotFound { display_name: capitalize(normalized) }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, PriceReport::Quoted { .. })
  }

  /// The sentence to speak.
  pub fn message(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for PriceReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PriceReport::Quoted { display_name, quote } => write!(
        f,
        "The current price of {} is ${} USD.",
        display_name,
        format_usd(&quote.usd_price)
      ),
      PriceReport::NotFound { display_name } => write!(
        f,
        "Sorry, I could not retrieve the price for {}. \
         Please check the cryptocurrency name and try again.",
        display_name
      ),
      PriceReport::FetchFailed => f.write_str(FETCH_FAILED_MESSAGE),
      PriceReport::IncorrectName => f.write_str(INCORRECT_NAME_MESSAGE),
    }
  }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };
  let mut out = String::new();
  out.extend(first.to_uppercase());
  out.push_str(&chars.as_str().to_lowercase());
  out
}

/// Render a JSON number with comma thousands separators.
///
/// Integers keep no fractional part, floats keep their shortest round-trip
/// digits and integral floats keep a trailing `.0`.
pub fn format_usd(price: &Number) -> String {
  if let Some(v) = price.as_u64() {
    return group_decimal(&v.to_string());
  }
  if let Some(v) = price.as_i64() {
    return group_decimal(&v.to_string());
  }
  match price.as_f64() {
    Some(v) => {
      let mut text = v.to_string();
      if v.fract() == 0.0 {
        text.push_str(".0");
      }
      group_decimal(&text)
    }
    None => price.to_string(),
  }
}

fn group_decimal(text: &str) -> String {
  let (sign, unsigned) = match text.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", text),
  };
  let (int_part, frac_part) = match unsigned.split_once('.') {
    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
    None => (unsigned, None),
  };

  let mut out = String::from(sign);
  out.push_str(&group_digits(int_part));
  if let Some(frac) = frac_part {
    out.push('.');
    out.push_str(frac);
  }
  out
}

fn group_digits(digits: &str) -> String {
  let chars: Vec<char> = digits.chars().rev().collect();
  let mut result = String::new();

  for (i, c) in chars.iter().enumerate() {
    if i > 0 && i % 3 == 0 {
      result.push(',');
    }
    result.push(*c);
  }

  result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn number(value: serde_json::Value) -> Number {
    match value {
      serde_json::Value::Number(n) => n,
      other => panic!("not a number: {}", other),
    }
  }

  #[test]
  fn test_capitalize() {
    assert_eq!(capitalize("bitcoin"), "Bitcoin");
    assert_eq!(capitalize("bitcoincash"), "Bitcoincash");
    assert_eq!(capitalize("eTHEREUM"), "Ethereum");
    assert_eq!(capitalize("1inch"), "1inch");
    assert_eq!(capitalize(""), "");
  }

  #[test]
  fn test_format_integers() {
    assert_eq!(format_usd(&number(json!(0))), "0");
    assert_eq!(format_usd(&number(json!(999))), "999");
    assert_eq!(format_usd(&number(json!(50000))), "50,000");
    assert_eq!(format_usd(&number(json!(1234567))), "1,234,567");
    assert_eq!(format_usd(&number(json!(-1234))), "-1,234");
  }

  #[test]
  fn test_format_floats() {
    assert_eq!(format_usd(&number(json!(1234.5))), "1,234.5");
    assert_eq!(format_usd(&number(json!(64123.87))), "64,123.87");
    assert_eq!(format_usd(&number(json!(0.0712))), "0.0712");
    assert_eq!(format_usd(&number(json!(50000.0))), "50,000.0");
  }

  #[test]
  fn test_quote_is_stamped_on_creation() {
    let before = Utc::now();
    let quote = PriceQuote::new("ethereum", number(json!(3000)));
    assert_eq!(quote.coin_id, "ethereum");
    assert!(quote.retrieved_at >= before && quote.retrieved_at <= Utc::now());
  }

  #[test]
  fn test_success_report() {
    let quote = PriceQuote::new("bitcoin", number(json!(50000)));
    let report = PriceReport::quoted("bitcoin", quote);
    assert!(report.is_success());
    assert_eq!(report.message(), "The current price of Bitcoin is $50,000 USD.");
  }

  #[test]
  fn test_failure_reports() {
    let report = PriceReport::not_found("dogecoin");
    assert!(!report.is_success());
    assert_eq!(
      report.message(),
      "Sorry, I could not retrieve the price for Dogecoin. \
       Please check the cryptocurrency name and try again."
    );

    assert_eq!(PriceReport::FetchFailed.message(), FETCH_FAILED_MESSAGE);
    assert_eq!(PriceReport::IncorrectName.message(), INCORRECT_NAME_MESSAGE);
    assert!(!PriceReport::FetchFailed.is_success());
  }
}
