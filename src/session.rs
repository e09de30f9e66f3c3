//! Event loop coordinating the team list, roster fetches and the view.
//!
//! One task owns the [`Selection`]. User commands arrive
//! on one channel; fetch tasks post their completions back on another. All
//! state changes happen inside the loop, one message at a time, and each
//! visible change is published to the view as a [`ViewEvent`].

use std::sync::Arc;

use log::{debug, error, info};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    config::Config,
    error::{FetchError, Result, RosterError},
    espn::{
        http::{fetch_teams, JsonSource},
        roster::fetch_roster,
        types::{Player, Team},
    },
    selection::{RosterRequest, Selection, SelectionEvent, SelectionState, Transition},
};


/// Requests from the view.
#[derive(Debug, Clone)]
pub enum Command {
    SelectTeam(Team),
    CloseSelection,
    Shutdown,
}

/// Notifications for the view.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    TeamsLoaded(Vec<Team>),
    SelectionStateChanged(SelectionState),
    GlobalError(String),
}

enum Completion {
    TeamsFetched(std::result::Result<Vec<Team>, FetchError>),
    RosterFetched {
        request: RosterRequest,
        result: std::result::Result<Vec<Player>, FetchError>,
    },
}

/// Cheap, cloneable sender side used by the view.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl SessionHandle {
    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| RosterError::SessionClosed)
    }

    pub fn select(&self, team: Team) -> Result<()> {
        self.send(Command::SelectTeam(team))
    }

    pub fn close(&self) -> Result<()> {
        self.send(Command::CloseSelection)
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }
}

pub struct Session {
    source: Arc<dyn JsonSource>,
    config: Arc<Config>,
    selection: Selection,
    in_flight: Option<JoinHandle<()>>,
    commands: mpsc::UnboundedReceiver<Command>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    events: mpsc::UnboundedSender<ViewEvent>,
}

/// Start a session on the current tokio runtime.
///
/// The team list is requested immediately; its outcome arrives as
/// [`ViewEvent::TeamsLoaded`] or [`ViewEvent::GlobalError`].
pub fn spawn(
    source: Arc<dyn JsonSource>,
    config: Config,
) -> (SessionHandle, mpsc::UnboundedReceiver<ViewEvent>, JoinHandle<()>) {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (completions_tx, completions_rx) = mpsc::unbounded_channel();

    let session = Session {
        source,
        config: Arc::new(config),
        selection: Selection::new(),
        in_flight: None,
        commands: commands_rx,
        completions_tx,
        completions_rx,
        events: events_tx,
    };

    let task = tokio::spawn(session.run());
    (SessionHandle { commands: commands_tx }, events_rx, task)
}

impl Session {
    async fn run(mut self) {
        self.start_teams_fetch();

        loop {
            tokio::select! {
                Some(done) = self.completions_rx.recv() => self.on_completion(done),
                command = self.commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.on_command(command),
                },
            }
        }

        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        debug!("session stopped");
    }

    fn publish(&self, event: ViewEvent) {
        // The view may already be gone during shutdown.
        let _ = self.events.send(event);
    }

    fn publish_state(&self) {
        self.publish(ViewEvent::SelectionStateChanged(self.selection.state().clone()));
    }

    fn start_teams_fetch(&self) {
        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let result = fetch_teams(source.as_ref(), &config).await;
            let _ = tx.send(Completion::TeamsFetched(result));
        });
    }

    fn start_roster_fetch(&mut self, request: RosterRequest) {
        if self.config.cancel_superseded {
            self.abort_in_flight();
        }

        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        let tx = self.completions_tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let result = fetch_roster(source.as_ref(), &config, &request.team.id).await;
            let _ = tx.send(Completion::RosterFetched { request, result });
        }));
    }

    fn abort_in_flight(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!("aborting superseded roster fetch");
            }
            task.abort();
        }
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::SelectTeam(team) => {
                if let Transition::Started(request) =
                    self.selection.apply(SelectionEvent::SelectTeam(team))
                {
                    self.start_roster_fetch(request);
                    self.publish_state();
                }
            }
            Command::CloseSelection => {
                if self.config.cancel_superseded {
                    self.abort_in_flight();
                }
                if self.selection.apply(SelectionEvent::Close) == Transition::Changed {
                    self.publish_state();
                }
            }
            Command::Shutdown => {}
        }
    }

    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::TeamsFetched(Ok(teams)) => {
                info!("{} teams loaded", teams.len());
                self.publish(ViewEvent::TeamsLoaded(teams));
            }
            Completion::TeamsFetched(Err(e)) => {
                let err = RosterError::TeamsLoad(e);
                error!("{err}");
                self.publish(ViewEvent::GlobalError(err.to_string()));
            }
            Completion::RosterFetched { request, result } => {
                let applied = self
                    .selection
                    .apply(SelectionEvent::RosterFetched { request, result });
                if applied == Transition::Changed {
                    self.in_flight = None;
                    self.publish_state();
                }
            }
        }
    }
}
