//! Season type for the ESPN core API.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional CLI fallback for `--season`; only read by [`Season::from_env_or_default`].
pub const SEASON_ENV_VAR: &str = "NFL_ROSTERS_SEASON";

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// Season from `NFL_ROSTERS_SEASON`, falling back to the built-in default.
    pub fn from_env_or_default() -> Result<Self> {
        match std::env::var(SEASON_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
