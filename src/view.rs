//! Plain-text rendering of teams, players and selection state.

use crate::{
    espn::types::{Player, Team},
    selection::SelectionState,
};

pub const LOADING_TEXT: &str = "Loading Players...";

/// `" 12  KC   Kansas City Chiefs (Kansas City)"`
pub fn format_team_row(team: &Team) -> String {
    format!(
        "{:>3}  {:<4} {} ({})",
        team.id.as_str(),
        team.abbreviation,
        team.display_name,
        team.location
    )
}

/// `"#15 Patrick Mahomes (QB)"`; missing jersey or position are left out.
pub fn format_player_row(player: &Player) -> String {
    let mut line = String::new();
    if let Some(jersey) = &player.jersey {
        line.push('#');
        line.push_str(jersey);
        line.push(' ');
    }
    line.push_str(&player.full_name);
    if let Some(pos) = &player.position {
        line.push_str(&format!(" ({pos})"));
    }
    line
}

/// Append `  <href>` when `links` is on and an image is known.
fn with_link(mut line: String, href: Option<&str>, links: bool) -> String {
    if let (true, Some(href)) = (links, href) {
        line.push_str("  ");
        line.push_str(href);
    }
    line
}

/// One row per team; with `links`, each row ends with the team logo URL.
pub fn format_teams(teams: &[Team], links: bool) -> String {
    teams
        .iter()
        .map(|t| with_link(format_team_row(t), t.logo.as_deref(), links))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Team header plus one row per player; with `links`, rows end with the headshot URL.
pub fn format_roster(team: &Team, players: &[Player], links: bool) -> String {
    let header = format!("{} ({} players)", team.display_name, players.len());
    let mut out = with_link(header, team.logo.as_deref(), links);
    for p in players {
        out.push('\n');
        out.push_str("  ");
        out.push_str(&with_link(format_player_row(p), p.headshot.as_deref(), links));
    }
    out
}

pub fn format_state(state: &SelectionState, links: bool) -> String {
    match state {
        SelectionState::Idle => "No team selected.".to_string(),
        SelectionState::Loading(team) => format!("{}: {LOADING_TEXT}", team.display_name),
        SelectionState::Ready(team, players) => format_roster(team, players, links),
        SelectionState::Failed(team, err) => {
            format!("{}: failed to load players: {err}", team.display_name)
        }
    }
}
