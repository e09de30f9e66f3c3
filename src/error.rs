//! Error types for the NFL roster browser

use thiserror::Error;

use crate::cli::types::TeamId;


pub type Result<T> = std::result::Result<T, RosterError>;

/// What went wrong while fetching one URL.
#[derive(Error, Debug)]
pub enum FetchCause {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// A failed GET of a single JSON resource.
///
/// Every request issued by the fetch client reports failure through this type,
/// tagged with the URL that was requested.
#[derive(Error, Debug)]
#[error("failed to fetch {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl Into<FetchCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::new(url, FetchCause::Status(status))
    }

    pub fn shape(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(url, FetchCause::Shape(message.into()))
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to load teams: {0}")]
    TeamsLoad(#[source] FetchError),

    #[error("Failed to load roster for team {team}: {source}")]
    RosterLoad {
        team: TeamId,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Team ID must not be empty")]
    InvalidTeamId,

    #[error("No team matches '{query}'")]
    TeamNotFound { query: String },

    #[error("Session is no longer running")]
    SessionClosed,
}
