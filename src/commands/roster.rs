//! `roster` command: print one team's players.

use crate::{
    commands::common::{find_team, load_teams},
    config::Config,
    error::RosterError,
    espn::roster::{fetch_roster_with, FanOutPolicy},
    view::format_roster,
    Result,
};

pub async fn handle_roster(
    config: &Config,
    query: &str,
    as_json: bool,
    links: bool,
    policy: FanOutPolicy,
) -> Result<()> {
    let (source, teams) = load_teams(config).await?;
    let team = find_team(&teams, query)?;

    let roster = fetch_roster_with(&source, config, &team.id, policy)
        .await
        .map_err(|e| RosterError::RosterLoad {
            team: team.id.clone(),
            source: e,
        })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?); // tarpaulin::skip
    } else {
        println!("{}", format_roster(team, &roster.players, links)); // tarpaulin::skip
    }

    if !roster.is_complete() {
        eprintln!("Skipped {} athletes that failed to load:", roster.skipped.len());
        for e in &roster.skipped {
            eprintln!("  {e}");
        }
    }
    Ok(())
}
