//! Unit tests for the selection state machine

use super::*;
use crate::cli::types::{PlayerId, TeamId};

fn team(id: &str) -> Team {
    Team {
        id: TeamId::new(id),
        display_name: format!("Team {id}"),
        location: "Somewhere".to_string(),
        abbreviation: format!("T{id}"),
        logo: None,
    }
}

fn player(id: &str, jersey: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        full_name: format!("Player {id}"),
        jersey: Some(jersey.to_string()),
        position: Some("QB".to_string()),
        headshot: None,
    }
}

fn failure() -> FetchError {
    FetchError::status("http://x/athletes", reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

#[test]
fn test_starts_idle() {
    let selection = Selection::new();
    assert!(selection.state().is_idle());
    assert!(selection.current().is_none());
}

#[test]
fn test_select_then_ready() {
    let mut selection = Selection::new();
    let request = selection.select_team(team("1"));

    assert!(matches!(selection.state(), SelectionState::Loading(t) if t.id.as_str() == "1"));
    assert!(selection.is_current(&request));

    let applied = selection.roster_fetched(request, Ok(vec![player("p1", "10"), player("p2", "7")]));
    assert!(applied);

    match selection.state() {
        SelectionState::Ready(t, players) => {
            assert_eq!(t.id.as_str(), "1");
            let jerseys: Vec<_> = players.iter().filter_map(|p| p.jersey.as_deref()).collect();
            assert_eq!(jerseys, vec!["10", "7"]);
        }
        other => panic!("Expected Ready, got {other:?}"),
    }
    assert!(selection.current().is_none());
}

#[test]
fn test_select_then_failed() {
    let mut selection = Selection::new();
    let request = selection.select_team(team("1"));

    assert!(selection.roster_fetched(request, Err(failure())));
    match selection.state() {
        SelectionState::Failed(t, e) => {
            assert_eq!(t.id.as_str(), "1");
            assert!(e.to_string().contains("500"));
        }
        other => panic!("Expected Failed, got {other:?}"),
    }
}

#[test]
fn test_late_result_for_superseded_team_is_discarded() {
    let mut selection = Selection::new();
    let a = selection.select_team(team("1"));
    let b = selection.select_team(team("2"));

    assert!(!selection.is_current(&a));
    assert!(selection.roster_fetched(b, Ok(vec![player("b1", "2")])));

    // A resolves after B.
    let transition = selection.apply(SelectionEvent::RosterFetched {
        request: a,
        result: Ok(vec![player("a1", "1")]),
    });
    assert_eq!(transition, Transition::Discarded);

    match selection.state() {
        SelectionState::Ready(t, players) => {
            assert_eq!(t.id.as_str(), "2");
            assert_eq!(players[0].id.as_str(), "b1");
        }
        other => panic!("Expected Ready for team 2, got {other:?}"),
    }
}

#[test]
fn test_superseded_result_before_current_does_not_flash() {
    let mut selection = Selection::new();
    let a = selection.select_team(team("1"));
    let _b = selection.select_team(team("2"));

    // A resolves first; B still loading.
    assert!(!selection.roster_fetched(a, Ok(vec![player("a1", "1")])));
    assert!(matches!(selection.state(), SelectionState::Loading(t) if t.id.as_str() == "2"));
}

#[test]
fn test_superseded_failure_is_discarded() {
    let mut selection = Selection::new();
    let a = selection.select_team(team("1"));
    let b = selection.select_team(team("2"));

    assert!(selection.roster_fetched(b, Ok(vec![])));
    assert!(!selection.roster_fetched(a, Err(failure())));
    assert!(matches!(selection.state(), SelectionState::Ready(t, _) if t.id.as_str() == "2"));
}

#[test]
fn test_reselecting_same_team_supersedes_earlier_request() {
    let mut selection = Selection::new();
    let first = selection.select_team(team("1"));
    let second = selection.select_team(team("1"));

    assert_ne!(first.generation, second.generation);
    assert!(!selection.roster_fetched(first, Err(failure())));
    assert!(matches!(selection.state(), SelectionState::Loading(_)));
    assert!(selection.roster_fetched(second, Ok(vec![])));
}

#[test]
fn test_generations_are_monotonic() {
    let mut selection = Selection::new();
    let g: Vec<u64> = (0..5)
        .map(|i| selection.select_team(team(&i.to_string())).generation)
        .collect();
    assert!(g.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_close_while_loading_discards_late_result() {
    let mut selection = Selection::new();
    let request = selection.select_team(team("1"));

    assert!(selection.close());
    assert!(selection.state().is_idle());
    assert!(selection.current().is_none());

    assert!(!selection.roster_fetched(request, Ok(vec![player("p", "1")])));
    assert!(selection.state().is_idle());
}

#[test]
fn test_close_from_ready_and_failed() {
    let mut selection = Selection::new();
    let r = selection.select_team(team("1"));
    selection.roster_fetched(r, Ok(vec![]));
    assert!(selection.close());
    assert!(selection.state().is_idle());

    let r = selection.select_team(team("2"));
    selection.roster_fetched(r, Err(failure()));
    assert!(selection.close());
    assert!(selection.state().is_idle());
}

#[test]
fn test_close_when_idle_is_noop() {
    let mut selection = Selection::new();
    assert_eq!(selection.apply(SelectionEvent::Close), Transition::Unchanged);
    assert!(!selection.close());
    assert!(selection.state().is_idle());
}

#[test]
fn test_applied_request_cannot_be_applied_twice() {
    let mut selection = Selection::new();
    let request = selection.select_team(team("1"));

    assert!(selection.roster_fetched(request.clone(), Ok(vec![player("p", "1")])));
    assert!(!selection.roster_fetched(request, Err(failure())));
    assert!(matches!(selection.state(), SelectionState::Ready(..)));
}

#[test]
fn test_state_display() {
    let mut selection = Selection::new();
    assert_eq!(selection.state().to_string(), "idle");

    let r = selection.select_team(team("1"));
    assert_eq!(selection.state().to_string(), "loading T1");

    selection.roster_fetched(r, Ok(vec![player("p", "1")]));
    assert_eq!(selection.state().to_string(), "ready T1 (1 players)");
    assert_eq!(selection.state().team().map(|t| t.id.as_str()), Some("1"));
}
