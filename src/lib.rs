//! NFL Teams & Rosters Library
//!
//! Fetches the NFL team list and per-team rosters from ESPN's public APIs and
//! coordinates team selection so only the most recent selection is ever shown.
//!
//! ## Features
//!
//! - **Teams**: one-shot fetch of every team (id, name, location, abbreviation, logo)
//! - **Rosters**: athlete index fetch followed by a concurrent fetch per athlete,
//!   joined in index order
//! - **Selection**: an explicit state machine (`Idle`, `Loading`, `Ready`, `Failed`)
//!   that discards results from superseded selections
//! - **Session**: a single-task event loop that drives the state machine and
//!   publishes view events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_rosters::{espn::{fetch_roster, fetch_teams, HttpSource}, Config};
//!
//! # async fn example() -> nfl_rosters::Result<()> {
//! let config = Config::default();
//! let source = HttpSource::new(&config)?;
//!
//! let teams = fetch_teams(&source, &config).await?;
//! let players = fetch_roster(&source, &config, &teams[0].id).await?;
//! for p in &players {
//!     println!("{}", nfl_rosters::view::format_player_row(p));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The library itself reads no environment variables: everything it needs is
//! passed in through [`Config`]. The `nfl-rosters` binary optionally falls back
//! to `NFL_ROSTERS_SEASON` when `--season` is not given:
//! ```bash
//! export NFL_ROSTERS_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;
pub mod selection;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, TeamId, SEASON_ENV_VAR};
pub use config::Config;
pub use error::{FetchCause, FetchError, Result, RosterError};
pub use espn::types::{Player, Team};
pub use selection::{RosterRequest, Selection, SelectionState};
pub use session::{SessionHandle, ViewEvent};
