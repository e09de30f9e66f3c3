use crate::cli::types::{PlayerId, TeamId};
use crate::error::FetchError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;


/// Decode a fetched JSON document into `T`, reporting mismatches against `url`.
pub fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::shape(url, e.to_string()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Team entry as served by the site API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: TeamId,
    pub display_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub logos: Vec<Link>,
}

/// An NFL team. Immutable once fetched.
///
/// Serializes to its own flat shape; ESPN documents are read through [`TeamRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub display_name: String,
    pub location: String,
    pub abbreviation: String,
    /// First logo href, if the team has any.
    pub logo: Option<String>,
}

impl From<TeamRecord> for Team {
    fn from(r: TeamRecord) -> Self {
        Self {
            id: r.id,
            display_name: r.display_name,
            location: r.location,
            abbreviation: r.abbreviation,
            logo: r.logos.into_iter().next().map(|l| l.href),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub team: TeamRecord,
}

#[derive(Debug, Deserialize)]
pub struct League {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Sport {
    #[serde(default)]
    pub leagues: Vec<League>,
}

/// Top-level envelope of the teams endpoint: `sports -> leagues -> teams`.
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    pub sports: Vec<Sport>,
}

impl TeamsEnvelope {
    /// Every team in document order.
    pub fn into_teams(self) -> Vec<Team> {
        self.sports
            .into_iter()
            .flat_map(|s| s.leagues)
            .flat_map(|l| l.teams)
            .map(|e| Team::from(e.team))
            .collect()
    }
}

/// Pointer to a full athlete resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AthleteRef {
    #[serde(rename = "$ref")]
    pub href: String,
}

/// One page of a team's athlete index.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteIndex {
    pub items: Vec<AthleteRef>,
    /// Total athletes on the team, across all pages.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
}

impl AthleteIndex {
    /// True when the index holds more athletes than this page returned.
    pub fn is_truncated(&self) -> bool {
        self.count
            .map(|c| c as usize > self.items.len())
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub struct PositionRecord {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Athlete detail document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
    pub id: PlayerId,
    pub full_name: String,
    #[serde(default)]
    pub jersey: Option<String>,
    #[serde(default)]
    pub position: Option<PositionRecord>,
    #[serde(default)]
    pub headshot: Option<Link>,
}

/// A rostered player, derived from an athlete detail document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub jersey: Option<String>,
    pub position: Option<String>,
    pub headshot: Option<String>,
}

impl From<AthleteRecord> for Player {
    fn from(r: AthleteRecord) -> Self {
        Self {
            id: r.id,
            full_name: r.full_name,
            jersey: r.jersey,
            position: r.position.and_then(|p| p.abbreviation),
            headshot: r.headshot.map(|h| h.href),
        }
    }
}
