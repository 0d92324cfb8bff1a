//! Keyboard navigation over live results: wrapping, Enter, reset on retype.

use crate::common::blog_index;
use lantern::{Key, SearchSession, SessionEvent};

fn open_session_with_query(query: &str) -> SearchSession {
    let mut session = SearchSession::new(blog_index());
    session.open();
    session.set_query(query);
    session
}

#[test]
fn test_down_up_round_trip_returns_to_start() {
    let mut session = open_session_with_query("rust");
    session.handle_key(Key::ArrowDown);
    let start = session.state().selected;
    session.handle_key(Key::ArrowDown);
    session.handle_key(Key::ArrowUp);
    assert_eq!(session.state().selected, start);
}

#[test]
fn test_up_from_idle_wraps_to_last_result() {
    let mut session = open_session_with_query("rust");
    let last = session.state().results.len() - 1;
    session.handle_key(Key::ArrowUp);
    assert_eq!(session.state().selected, Some(last));
}

#[test]
fn test_full_down_cycle_wraps_to_first() {
    let mut session = open_session_with_query("rust");
    let len = session.state().results.len();
    for _ in 0..=len {
        session.handle_key(Key::ArrowDown);
    }
    assert_eq!(session.state().selected, Some(0));
}

#[test]
fn test_enter_navigates_to_top_hit_when_idle() {
    let mut session = open_session_with_query("rust");
    let top_url = session.state().results[0].url.clone();
    assert_eq!(
        session.handle_key(Key::Enter),
        Some(SessionEvent::Navigate(top_url))
    );
}

#[test]
fn test_enter_follows_the_arrowed_selection() {
    let mut session = open_session_with_query("rust");
    session.handle_key(Key::ArrowDown);
    session.handle_key(Key::ArrowDown);
    let second_url = session.state().results[1].url.clone();
    assert_eq!(
        session.handle_key(Key::Enter),
        Some(SessionEvent::Navigate(second_url))
    );
}

#[test]
fn test_retyping_resets_selection_to_idle() {
    let mut session = open_session_with_query("rust");
    session.handle_key(Key::ArrowDown);
    session.set_query("rust b");
    assert_eq!(session.state().selected, None);
}

#[test]
fn test_selection_survives_no_keystrokes_between_arrows() {
    // Two arrow presses with nothing in between behave sequentially: the
    // second sees exactly the state the first left behind.
    let mut session = open_session_with_query("rust");
    session.handle_key(Key::ArrowDown);
    session.handle_key(Key::ArrowDown);
    assert_eq!(session.state().selected, Some(1));
}
