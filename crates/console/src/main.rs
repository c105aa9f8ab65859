//! beepy - command-line client for the Beepy referral console.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::TerminalNavigator;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    beepy_observability::tracing::init(cli.log_format);

    let config = commands::config(&cli)?;
    let storage = config
        .session_storage()
        .context("cannot locate the session file")?;
    tracing::debug!(base_url = %config.base_url, session = %storage.path().display(), "starting");

    let app = beepy_client::AppState::new(config, storage, Arc::new(TerminalNavigator))
        .context("failed to set up the API client")?;

    commands::run(&app, cli.command).await
}
