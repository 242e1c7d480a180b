use thiserror::Error;

/// The main error type for cp-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// File system error while reading configuration
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  /// Capability descriptor is malformed or incomplete
  #[error("Invalid capability descriptor: {0}")]
  Descriptor(String),

  /// HTTP transport error, including non-success status codes
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body could not be interpreted
  #[error("Parse error: {0}")]
  Parse(String),

  /// The conversation host failed to prompt or speak
  #[error("Host error: {0}")]
  Host(String),
}

/// Result type alias for cp-* crates
pub type Result<T> = std::result::Result<T, Error>;
