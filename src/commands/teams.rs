//! `teams` command: list every NFL team.

use crate::{commands::common::load_teams, config::Config, view::format_teams, Result};

pub async fn handle_teams(config: &Config, as_json: bool, links: bool) -> Result<()> {
    let (_, teams) = load_teams(config).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?); // tarpaulin::skip
    } else {
        println!("{}", format_teams(&teams, links)); // tarpaulin::skip
    }
    Ok(())
}
