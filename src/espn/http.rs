//! HTTP access to the ESPN site and core APIs.

use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::FetchError,
    espn::types::{decode, Team, TeamsEnvelope},
};



/// Anything that can GET a URL and hand back parsed JSON.
///
/// Implementations perform exactly one attempt per call: no retry, no caching.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Headers sent with every request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// [`JsonSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(common_headers())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {url}");

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        let status = res.status();
        if !status.is_success() {
            debug!("GET {url} -> {status}");
            return Err(FetchError::status(url, status));
        }

        let body = res.text().await.map_err(|e| FetchError::new(url, e))?;
        serde_json::from_str::<Value>(&body).map_err(|e| FetchError::new(url, e))
    }
}

/// Fetch the full team list once.
pub async fn fetch_teams<S>(source: &S, config: &Config) -> Result<Vec<Team>, FetchError>
where
    S: JsonSource + ?Sized,
{
    let url = config.teams_url.as_str();
    let envelope: TeamsEnvelope = decode(url, source.fetch_json(url).await?)?;
    let teams = envelope.into_teams();
    debug!("loaded {} teams", teams.len());
    Ok(teams)
}
