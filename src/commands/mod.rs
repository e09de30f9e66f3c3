//! Command implementations for the NFL roster CLI

pub mod browse;
pub mod common;
pub mod roster;
pub mod teams;


pub use common::find_team;
