//! Helpers shared by the command handlers.

use crate::{
    config::Config,
    error::{Result, RosterError},
    espn::{
        http::{fetch_teams, HttpSource},
        types::Team,
    },
};

/// Resolve a user-supplied team reference.
///
/// Tries, in order: exact id, case-insensitive abbreviation, then a
/// case-insensitive substring of the display name.
pub fn find_team<'a>(teams: &'a [Team], query: &str) -> Result<&'a Team> {
    let q = query.trim();
    if q.is_empty() {
        return Err(RosterError::InvalidTeamId);
    }
    let lower = q.to_lowercase();

    teams
        .iter()
        .find(|t| t.id.as_str() == q)
        .or_else(|| teams.iter().find(|t| t.abbreviation.eq_ignore_ascii_case(q)))
        .or_else(|| {
            teams
                .iter()
                .find(|t| t.display_name.to_lowercase().contains(&lower))
        })
        .ok_or_else(|| RosterError::TeamNotFound {
            query: q.to_string(),
        })
}

/// Build the HTTP source and fetch the team list, mapping failure to a teams-load error.
pub async fn load_teams(config: &Config) -> Result<(HttpSource, Vec<Team>)> {
    let source = HttpSource::new(config)?;
    let teams = fetch_teams(&source, config)
        .await
        .map_err(RosterError::TeamsLoad)?;
    Ok((source, teams))
}
