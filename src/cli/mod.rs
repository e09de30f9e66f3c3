//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Season;

use crate::{
    config::{Config, DEFAULT_ROSTER_LIMIT},
    Result,
};

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Season year (or set `NFL_ROSTERS_SEASON`; defaults to 2024).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// Athletes requested per roster (first index page only).
    #[clap(long, global = true, default_value_t = DEFAULT_ROSTER_LIMIT)]
    pub limit: u32,

    /// Override the teams list endpoint.
    #[clap(long, global = true)]
    pub teams_url: Option<String>,

    /// Override the ESPN core API base (`.../leagues/nfl`).
    #[clap(long, global = true)]
    pub core_url: Option<String>,

    /// Log every request to stderr.
    #[clap(long, global = true)]
    pub debug: bool,
}

impl GlobalOptions {
    pub fn to_config(&self) -> Result<Config> {
        let season = match self.season {
            Some(s) => s,
            None => Season::from_env_or_default()?,
        };

        let mut config = Config {
            season,
            roster_limit: self.limit,
            ..Config::default()
        };
        if let Some(url) = &self.teams_url {
            config.teams_url = url.clone();
        }
        if let Some(url) = &self.core_url {
            config.core_base_url = url.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every NFL team.
    Teams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Append team logo and player headshot URLs to text rows.
        #[clap(long)]
        links: bool,
    },

    /// Show one team's roster.
    ///
    /// TEAM may be an ESPN team id, an abbreviation (`KC`) or part of the name.
    Roster {
        team: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Keep players that loaded even if some athletes fail.
        #[clap(long)]
        skip_failed: bool,

        /// Append team logo and player headshot URLs to text rows.
        #[clap(long)]
        links: bool,
    },

    /// Interactively pick teams and view their rosters.
    Browse {
        /// Let superseded roster fetches run to completion instead of aborting them.
        #[clap(long)]
        no_cancel: bool,

        /// Append team logo and player headshot URLs to text rows.
        #[clap(long)]
        links: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-rosters", about = "Browse NFL teams and rosters from ESPN")]
pub struct Cli {
    #[clap(flatten)]
    pub options: GlobalOptions,

    #[clap(subcommand)]
    pub command: Commands,
}
