//! Strongly-typed values shared by the CLI and the library.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use time::{Season, SEASON_ENV_VAR};
