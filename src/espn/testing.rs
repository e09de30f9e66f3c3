//! In-memory [`JsonSource`] with scripted responses and latencies.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::{error::FetchError, espn::http::JsonSource};

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode),
}

#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<HashMap<String, (Duration, Reply)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, url: &str, delay_ms: u64, body: Value) -> Self {
        self.insert(url, delay_ms, Reply::Json(body))
    }

    pub fn status(self, url: &str, delay_ms: u64, status: u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.insert(url, delay_ms, Reply::Status(status))
    }

    fn insert(self, url: &str, delay_ms: u64, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), (Duration::from_millis(delay_ms), reply));
        self
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.requests().iter().filter(|u| u.contains(needle)).count()
    }
}

#[async_trait]
impl JsonSource for ScriptedSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        let scripted = self.replies.lock().unwrap().get(url).cloned();

        match scripted {
            Some((delay, reply)) => {
                tokio::time::sleep(delay).await;
                match reply {
                    Reply::Json(v) => Ok(v),
                    Reply::Status(s) => Err(FetchError::status(url, s)),
                }
            }
            None => Err(FetchError::status(url, StatusCode::NOT_FOUND)),
        }
    }
}

pub fn team_json(id: &str, name: &str, abbr: &str) -> Value {
    json!({
        "id": id,
        "displayName": name,
        "location": name.split(' ').next().unwrap_or(name),
        "abbreviation": abbr,
        "logos": [{ "href": format!("http://logos/{abbr}.png") }]
    })
}

pub fn teams_json(teams: &[Value]) -> Value {
    let entries: Vec<Value> = teams.iter().map(|t| json!({ "team": t })).collect();
    json!({ "sports": [{ "leagues": [{ "teams": entries }] }] })
}

pub fn index_json(refs: &[&str]) -> Value {
    let items: Vec<Value> = refs.iter().map(|r| json!({ "$ref": r })).collect();
    json!({ "count": refs.len(), "pageCount": 1, "items": items })
}

pub fn athlete_json(id: &str, name: &str, jersey: &str, pos: &str) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "jersey": jersey,
        "position": { "abbreviation": pos },
        "headshot": { "href": format!("http://headshots/{id}.png") }
    })
}
