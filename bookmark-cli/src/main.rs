mod cli;
mod commands;
mod logging;
mod output;
mod session;

use anyhow::Result;
use bookmark_board::BoardConfig;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose, cli.debug, cli.quiet);

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    commands::run(cli.command, &config, cli.format).await
}

/// Configuration files and environment, then flags
fn resolve_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = BoardConfig::load()?;
    if let Some(dir) = &cli.store_dir {
        config.store_dir = dir.clone();
    }
    if let Some(key) = &cli.key {
        config.store_key = key.clone();
    }
    if let Some(actor) = &cli.actor {
        config.actor = Some(actor.clone());
    }
    Ok(config)
}
