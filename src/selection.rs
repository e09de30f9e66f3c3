//! Team selection state machine.
//!
//! Every mutation goes through [`Selection::apply`]. A roster result is only
//! committed when it belongs to the most recently issued [`RosterRequest`], so
//! a slow response for a superseded team can never overwrite a newer one.

use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::FetchError,
    espn::types::{Player, Team},
};

#[cfg(test)]
mod tests;

/// What the view should currently show for the selected team.
#[derive(Debug, Clone, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Loading(Team),
    Ready(Team, Vec<Player>),
    Failed(Team, Arc<FetchError>),
}

impl SelectionState {
    pub fn team(&self) -> Option<&Team> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Loading(t) | SelectionState::Ready(t, _) | SelectionState::Failed(t, _) => {
                Some(t)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Idle => write!(f, "idle"),
            SelectionState::Loading(t) => write!(f, "loading {}", t.abbreviation),
            SelectionState::Ready(t, p) => write!(f, "ready {} ({} players)", t.abbreviation, p.len()),
            SelectionState::Failed(t, _) => write!(f, "failed {}", t.abbreviation),
        }
    }
}

/// "Fetch the roster for this team", tagged with a generation number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRequest {
    pub generation: u64,
    pub team: Team,
}

/// Inputs to the state machine.
#[derive(Debug)]
pub enum SelectionEvent {
    SelectTeam(Team),
    RosterFetched {
        request: RosterRequest,
        result: Result<Vec<Player>, FetchError>,
    },
    Close,
}

/// Result of applying one [`SelectionEvent`].
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new roster fetch must be started for this request.
    Started(RosterRequest),
    /// The visible state changed.
    Changed,
    /// A result arrived for a request that is no longer current.
    Discarded,
    /// Nothing to do (e.g. closing while idle).
    Unchanged,
}

#[derive(Debug, Default)]
pub struct Selection {
    state: SelectionState,
    current: Option<RosterRequest>,
    generation: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The in-flight request whose result would still be committed.
    pub fn current(&self) -> Option<&RosterRequest> {
        self.current.as_ref()
    }

    pub fn is_current(&self, request: &RosterRequest) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| c.generation == request.generation)
    }

    fn start(&mut self, team: Team) -> RosterRequest {
        self.generation += 1;
        let request = RosterRequest {
            generation: self.generation,
            team: team.clone(),
        };
        info!(
            "select {} ({}), request #{}",
            team.display_name, team.id, request.generation
        );
        self.current = Some(request.clone());
        self.state = SelectionState::Loading(team);
        request
    }

    pub fn apply(&mut self, event: SelectionEvent) -> Transition {
        match event {
            SelectionEvent::SelectTeam(team) => Transition::Started(self.start(team)),

            SelectionEvent::RosterFetched { request, result } => {
                if !self.is_current(&request) {
                    debug!(
                        "discarding roster for {} from superseded request #{}",
                        request.team.id, request.generation
                    );
                    return Transition::Discarded;
                }
                self.current = None;
                self.state = match result {
                    Ok(players) => {
                        info!("roster ready for {}: {} players", request.team.id, players.len());
                        SelectionState::Ready(request.team, players)
                    }
                    Err(e) => {
                        info!("roster failed for {}: {e}", request.team.id);
                        SelectionState::Failed(request.team, Arc::new(e))
                    }
                };
                Transition::Changed
            }

            SelectionEvent::Close => {
                self.current = None;
                if self.state.is_idle() {
                    return Transition::Unchanged;
                }
                self.state = SelectionState::Idle;
                Transition::Changed
            }
        }
    }

    /// Select `team`, superseding any in-flight request.
    pub fn select_team(&mut self, team: Team) -> RosterRequest {
        self.start(team)
    }

    /// Commit a roster result. Returns `true` if it was applied.
    pub fn roster_fetched(
        &mut self,
        request: RosterRequest,
        result: Result<Vec<Player>, FetchError>,
    ) -> bool {
        self.apply(SelectionEvent::RosterFetched { request, result }) == Transition::Changed
    }

    /// Clear the selection. Returns `true` if the visible state changed.
    pub fn close(&mut self) -> bool {
        self.apply(SelectionEvent::Close) == Transition::Changed
    }
}
