//! Endpoint and behaviour settings for the roster client.

use crate::cli::types::{Season, TeamId};

/// Site API listing every NFL team.
pub const TEAMS_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";

/// Base path for the ESPN core API (NFL league).
pub const CORE_BASE_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

/// Athlete index page size. Rosters beyond this are truncated, not paginated.
pub const DEFAULT_ROSTER_LIMIT: u32 = 50;

pub const USER_AGENT: &str = concat!("nfl-rosters/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub teams_url: String,
    pub core_base_url: String,
    pub season: Season,
    pub roster_limit: u32,
    pub user_agent: String,
    /// Abort the in-flight roster task when a newer selection supersedes it.
    pub cancel_superseded: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            teams_url: TEAMS_URL.to_string(),
            core_base_url: CORE_BASE_URL.to_string(),
            season: Season::default(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            user_agent: USER_AGENT.to_string(),
            cancel_superseded: true,
        }
    }
}

impl Config {
    /// Point both endpoints at a single host, e.g. a mock server in tests.
    ///
    /// The teams list is served from `{base}/teams` and the core API from `{base}/core`.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            teams_url: format!("{base}/teams"),
            core_base_url: format!("{base}/core"),
            ..Self::default()
        }
    }

    /// Athlete index endpoint for one team in the configured season.
    pub fn roster_index_url(&self, team_id: &TeamId) -> String {
        format!(
            "{}/seasons/{}/teams/{}/athletes?limit={}",
            self.core_base_url.trim_end_matches('/'),
            self.season,
            team_id,
            self.roster_limit
        )
    }
}
