use anyhow::Result;
use clap::Args;
use cp_capability::CryptoPriceCapability;
use cp_core::Config;
use tracing::info;

#[derive(Args, Debug)]
pub struct PriceCommand {
  /// Coin name as it would be spoken, e.g. "Bitcoin Cash"
  #[arg(required = true, num_args = 1..)]
  coin: Vec<String>,
}

/// One-shot lookup without the conversation flow.
pub async fn execute(cmd: PriceCommand, config: Config) -> Result<()> {
  let capability = CryptoPriceCapability::from_config(&config)?;
  let spoken = cmd.coin.join(" ");

  let report = match capability.resolver().fetch(&spoken).await {
    Ok(report) => report,
    Err(report) => {
      info!("Lookup for {:?} did not succeed", spoken);
      report
    }
  };

  println!("{}", report);
  Ok(())
}
