//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nfl_rosters::{
    cli::{Cli, Commands},
    commands::{browse::handle_browse, roster::handle_roster, teams::handle_teams},
    espn::FanOutPolicy,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.options.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = cli.options.to_config().context("invalid options")?;

    match cli.command {
        Commands::Teams { json, links } => handle_teams(&config, json, links)
            .await
            .context("listing teams")?,

        Commands::Roster {
            team,
            json,
            skip_failed,
            links,
        } => {
            let policy = if skip_failed {
                FanOutPolicy::SkipFailed
            } else {
                FanOutPolicy::AllOrNothing
            };
            handle_roster(&config, &team, json, links, policy)
                .await
                .with_context(|| format!("showing roster for '{team}'"))?
        }

        Commands::Browse { no_cancel, links } => {
            config.cancel_superseded = !no_cancel;
            handle_browse(config, links).await.context("browse session")?
        }
    }

    Ok(())
}
