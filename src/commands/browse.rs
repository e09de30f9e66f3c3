//! `browse` command: interactive team selection on stdin.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    commands::common::find_team,
    config::Config,
    espn::http::HttpSource,
    espn::types::Team,
    session::{self, ViewEvent},
    view::{format_state, format_teams},
    Result,
};

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Close,
    List,
    Select(String),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        "" => Input::Empty,
        "q" | "quit" | "exit" => Input::Quit,
        "c" | "close" => Input::Close,
        "l" | "ls" | "list" => Input::List,
        other => Input::Select(other.to_string()),
    }
}

const HELP: &str = "Enter a team id, abbreviation or name to show its roster; `close` to clear; `list` to show teams; `quit` to exit.";

pub async fn handle_browse(config: Config, links: bool) -> Result<()> {
    let source = Arc::new(HttpSource::new(&config)?);
    let (handle, mut events, task) = session::spawn(source, config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut teams: Vec<Team> = Vec::new();

    println!("Loading teams...");
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(ViewEvent::TeamsLoaded(loaded)) => {
                    println!("{}", format_teams(&loaded, links));
                    println!("{HELP}");
                    teams = loaded;
                }
                Some(ViewEvent::SelectionStateChanged(state)) => {
                    println!("{}", format_state(&state, links))
                }
                Some(ViewEvent::GlobalError(msg)) => eprintln!("Error: {msg}"),
                None => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else {
                    handle.shutdown()?;
                    break;
                };
                match parse_input(&line) {
                    Input::Quit => {
                        handle.shutdown()?;
                        break;
                    }
                    Input::Close => handle.close()?,
                    Input::List => println!("{}", format_teams(&teams, links)),
                    Input::Empty => {}
                    Input::Select(query) => match find_team(&teams, &query) {
                        Ok(team) => handle.select(team.clone())?,
                        Err(e) => eprintln!("{e}"),
                    },
                }
            }
        }
    }

    // The session exits on shutdown; a join error here only means it was cancelled.
    let _ = task.await;
    Ok(())
}
