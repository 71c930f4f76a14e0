//! roshambo Binary
//!
//! Plays rock-paper-scissors between two random players until Ctrl-C.
//!
//! Options: --seed, --pause, --rounds, --logs

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    log(config.logs.as_deref())?;
    Room::new(&config).run().await?;
    Ok(())
}
