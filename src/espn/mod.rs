//! ESPN API access: HTTP fetching, response types and roster aggregation.

pub mod http;
pub mod roster;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use http::{fetch_teams, HttpSource, JsonSource};
pub use roster::{fetch_roster, fetch_roster_with, FanOutPolicy, Roster};
pub use types::{Player, Team};
