use anyhow::{Context, Result};
use clap::Args;
use cp_capability::prelude::*;
use tracing::{info, warn};

use crate::console::ConsoleHost;

#[derive(Args, Debug)]
pub struct ConverseCommand {
  /// Coin to check without asking first
  #[arg(long)]
  preset: Option<String>,
}

/// Run a single invocation of the capability on this terminal.
pub async fn execute(cmd: ConverseCommand, config: Config) -> Result<()> {
  let capability = CryptoPriceCapability::from_config(&config)?;
  let host = Arc::new(ConsoleHost::stdio());

  let mut ctx = InvocationContext::new(host);
  if let Some(preset) = cmd.preset {
    ctx = ctx.with_preset(preset);
  }

  capability.call(ctx).await.context("capability task panicked")??;
  Ok(())
}

/// Read utterances until input closes, dispatching each to the capability
/// whose hotwords it contains.
pub async fn listen(config: Config) -> Result<()> {
  let mut registry = CapabilityRegistry::new();
  registry.register(Arc::new(CryptoPriceCapability::from_config(&config)?))?;
  info!("Listening for: {}", registry.names().join(", "));

  let host = Arc::new(ConsoleHost::stdio());

  while let Some(utterance) = host.next_utterance().await? {
    let Some(capability) = registry.dispatch(&utterance) else {
      host.say("I can't help with that yet.");
      continue;
    };

    let invocation = capability.call(InvocationContext::new(host.clone()));
    match invocation.await.context("capability task panicked")? {
      Ok(()) => {}
      Err(e) => {
        warn!("{} failed: {}", capability.descriptor().unique_name, e);
        break;
      }
    }
  }

  Ok(())
}
