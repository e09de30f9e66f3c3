//! Team roster aggregation: athlete index, then a concurrent fetch per athlete.

use futures::future::{join_all, try_join_all};
use log::{debug, warn};
use serde::Serialize;

use crate::{
    cli::types::TeamId,
    config::Config,
    error::FetchError,
    espn::{
        http::JsonSource,
        types::{decode, AthleteIndex, AthleteRecord, AthleteRef, Player},
    },
};


/// How a roster fetch treats individual athlete failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanOutPolicy {
    /// Any athlete failure fails the whole roster.
    #[default]
    AllOrNothing,
    /// Failed athletes are dropped and reported in [`Roster::skipped`].
    SkipFailed,
}

/// Players in athlete-index order, plus the athletes that could not be loaded.
#[derive(Debug, Default, Serialize)]
pub struct Roster {
    pub players: Vec<Player>,
    #[serde(skip)]
    pub skipped: Vec<FetchError>,
}

impl Roster {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

async fn fetch_index<S>(
    source: &S,
    config: &Config,
    team_id: &TeamId,
) -> Result<Vec<AthleteRef>, FetchError>
where
    S: JsonSource + ?Sized,
{
    let url = config.roster_index_url(team_id);
    let index: AthleteIndex = decode(&url, source.fetch_json(&url).await?)?;

    if index.is_truncated() {
        warn!(
            "team {team_id}: roster index lists {} athletes, only the first {} are loaded",
            index.count.unwrap_or_default(),
            index.items.len()
        );
    }
    Ok(index.items)
}

async fn fetch_player<S>(source: &S, athlete: &AthleteRef) -> Result<Player, FetchError>
where
    S: JsonSource + ?Sized,
{
    let value = source.fetch_json(&athlete.href).await?;
    let record: AthleteRecord = decode(&athlete.href, value)?;
    Ok(record.into())
}

/// Fetch every player on a team, failing if any single athlete fails.
///
/// Players come back in the order the athlete index lists them, regardless of
/// which detail request completes first.
pub async fn fetch_roster<S>(
    source: &S,
    config: &Config,
    team_id: &TeamId,
) -> Result<Vec<Player>, FetchError>
where
    S: JsonSource + ?Sized,
{
    let refs = fetch_index(source, config, team_id).await?;
    debug!("team {team_id}: fetching {} athletes", refs.len());

    try_join_all(refs.iter().map(|r| fetch_player(source, r))).await
}

/// Fetch a team's roster under an explicit [`FanOutPolicy`].
///
/// An index failure always fails the call and no athlete requests are issued.
pub async fn fetch_roster_with<S>(
    source: &S,
    config: &Config,
    team_id: &TeamId,
    policy: FanOutPolicy,
) -> Result<Roster, FetchError>
where
    S: JsonSource + ?Sized,
{
    match policy {
        FanOutPolicy::AllOrNothing => {
            let players = fetch_roster(source, config, team_id).await?;
            Ok(Roster {
                players,
                skipped: Vec::new(),
            })
        }
        FanOutPolicy::SkipFailed => {
            let refs = fetch_index(source, config, team_id).await?;
            debug!("team {team_id}: fetching {} athletes", refs.len());

            let results = join_all(refs.iter().map(|r| fetch_player(source, r))).await;

            let mut roster = Roster::default();
            for result in results {
                match result {
                    Ok(player) => roster.players.push(player),
                    Err(e) => {
                        warn!("team {team_id}: skipping athlete: {e}");
                        roster.skipped.push(e);
                    }
                }
            }
            Ok(roster)
        }
    }
}
