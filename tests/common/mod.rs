//! Mock ESPN server shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub fn team(id: &str, name: &str, abbr: &str) -> Value {
    json!({
        "id": id,
        "displayName": name,
        "location": name,
        "abbreviation": abbr,
        "logos": [{ "href": format!("https://a.espncdn.com/i/teamlogos/nfl/500/{abbr}.png") }]
    })
}

pub fn athlete(id: &str, name: &str, jersey: &str, pos: &str) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "jersey": jersey,
        "position": { "abbreviation": pos },
        "headshot": { "href": format!("https://a.espncdn.com/i/headshots/nfl/players/full/{id}.png") }
    })
}

pub async fn mount_teams(server: &MockServer, teams: &[Value]) {
    let entries: Vec<Value> = teams.iter().map(|t| json!({ "team": t })).collect();
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "sports": [{ "leagues": [{ "teams": entries }] }] })),
        )
        .mount(server)
        .await;
}

/// Mount a team's athlete index (answered after `index_delay_ms`) and each
/// athlete document (answered after its own delay).
pub async fn mount_roster(
    server: &MockServer,
    team_id: &str,
    index_delay_ms: u64,
    athletes: &[(&str, u64, Value)],
) {
    let items: Vec<Value> = athletes
        .iter()
        .map(|(key, _, _)| json!({ "$ref": format!("{}/athletes/{key}", server.uri()) }))
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/core/seasons/2024/teams/{team_id}/athletes")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "count": items.len(), "items": items }))
                .set_delay(Duration::from_millis(index_delay_ms)),
        )
        .mount(server)
        .await;

    for (key, delay_ms, body) in athletes {
        Mock::given(method("GET"))
            .and(path(format!("/athletes/{key}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(Duration::from_millis(*delay_ms)),
            )
            .mount(server)
            .await;
    }
}
