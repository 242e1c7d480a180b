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

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cp_core::Config;
use dotenvy::dotenv;
use std::path::PathBuf;

mod commands;
mod console;

use commands::{converse::ConverseCommand, price::PriceCommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "crypto-price")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  overrides: ConfigOverrides,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Look up one coin and print the report
  Price(PriceCommand),
  /// Run the capability against this terminal
  Ask(ConverseCommand),
  /// Wait for utterances and dispatch them by hotword
  Listen,
}

/// Command-line values that take precedence over the environment.
#[derive(Args, Debug, Default)]
struct ConfigOverrides {
  /// Price API base URL
  #[arg(long, global = true)]
  base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, global = true)]
  timeout_secs: Option<u64>,

  /// Maximum prompts before giving up
  #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
  max_attempts: Option<u32>,

  /// Milliseconds to wait after speaking
  #[arg(long, global = true)]
  settle_millis: Option<u64>,

  /// Capability descriptor JSON file
  #[arg(long, global = true)]
  capability_config: Option<PathBuf>,
}

impl ConfigOverrides {
  fn apply(self, mut config: Config) -> Config {
    if let Some(base_url) = self.base_url {
      config.base_url = base_url;
    }
    if self.timeout_secs.is_some() {
      config.timeout_secs = self.timeout_secs;
    }
    if self.max_attempts.is_some() {
      config.max_attempts = self.max_attempts;
    }
    if let Some(settle_millis) = self.settle_millis {
      config.settle_millis = settle_millis;
    }
    if self.capability_config.is_some() {
      config.capability_config = self.capability_config;
    }
    config
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = cli.overrides.apply(Config::from_env()?);

  // Execute command
  match cli.command {
    Commands::Price(cmd) => commands::price::execute(cmd, config).await?,
    Commands::Ask(cmd) => commands::converse::execute(cmd, config).await?,
    Commands::Listen => commands::converse::listen(config).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_overrides_take_precedence() {
    let cli = Cli::parse_from([
      "crypto-price",
      "--max-attempts",
      "2",
      "--base-url",
      "http://localhost:1234",
      "price",
      "bitcoin",
    ]);
    let config = cli.overrides.apply(Config::default());

    assert_eq!(config.max_attempts, Some(2));
    assert_eq!(config.base_url, "http://localhost:1234");
    assert_eq!(config.timeout_secs, None);
  }

  #[test]
  fn test_zero_attempts_rejected() {
    assert!(Cli::try_parse_from(["crypto-price", "--max-attempts", "0", "listen"]).is_err());
  }

  #[test]
  fn test_cli_definition() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }
}
