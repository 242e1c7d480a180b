//! Reduction of spoken text to a canonical lookup key.

/// Normalize a user utterance or preset argument into a lookup key.
///
/// Leading and trailing whitespace is trimmed, the text is lowercased, and
/// ASCII punctuation and every whitespace character are removed, so
/// `" Bitcoin Cash! "` becomes `"bitcoincash"`. Characters outside the
/// alphanumeric classes (curly quotes, symbols, combining marks) are dropped
/// as well, and so are capitals with no lowercase mapping (mathematical
/// alphanumerics such as U+1D400); the result only ever contains lowercase
/// alphanumerics.
///
/// The function is total and idempotent. Empty input yields an empty key.
pub fn normalize(text: &str) -> String {
  text
    .trim()
    .to_lowercase()
    .chars()
    .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
    .filter(|c| c.is_alphanumeric() && !c.is_uppercase())
    .collect()
}
