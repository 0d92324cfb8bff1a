//! The search session: lifecycle, query handling, and keyboard navigation.
//!
//! A [`SearchSession`] is constructed once per page view with the build-time
//! index and lives for the lifetime of the page. Lifecycle is strictly
//! `open -> set_query* -> close`; closing always returns the session to the
//! pristine state, so reopening shows an empty query and no results.
//!
//! Everything here is synchronous and single-threaded: each keystroke fully
//! recomputes the results before the next one is handled, so a later
//! keystroke always observes the final state left by the previous one
//! (last write wins, nothing can be stale).
//!
//! The selection transitions are free functions over `Option<usize>` so the
//! state machine can be tested without any rendering surface.

use tracing::warn;

use crate::index::IndexError;
use crate::search::search;
use crate::types::{QueryState, SearchIndex};

/// Keyboard input the session reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What the embedding shell must do in response to a key press.
///
/// The session never navigates or touches the page itself; it hands the
/// decision back to whatever owns the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Perform a full page navigation to the given URL.
    Navigate(String),
    /// The surface was dismissed; hide it.
    Closed,
}

/// Move the selection one step down, wrapping past the end.
///
/// From idle the first result is selected.
pub fn next_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) => Some((i + 1) % len),
    }
}

/// Move the selection one step up, wrapping past the start.
///
/// From idle the last result is selected.
pub fn prev_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None | Some(0) => Some(len - 1),
        Some(i) => Some(i - 1),
    }
}

/// One search session over an immutable index.
pub struct SearchSession {
    /// `None` after a startup load failure: the feature is disabled for the
    /// whole session and every query yields nothing.
    index: Option<SearchIndex>,
    state: QueryState,
    open: bool,
}

impl SearchSession {
    /// Create a session over an already-loaded index.
    pub fn new(index: SearchIndex) -> Self {
        SearchSession {
            index: Some(index),
            state: QueryState::default(),
            open: false,
        }
    }

    /// Create a session from the serialized index payload.
    ///
    /// A malformed payload disables search for the session: the trigger
    /// stays wired up but no query will ever produce results. The failure
    /// is logged, never shown to the reader.
    pub fn from_json(raw: &str) -> Self {
        match SearchIndex::from_json(raw) {
            Ok(index) => SearchSession::new(index),
            Err(err) => SearchSession::disabled(&err),
        }
    }

    /// Create a permanently disabled session, logging the cause.
    pub fn disabled(err: &IndexError) -> Self {
        warn!(error = %err, "search index failed to load, search disabled");
        SearchSession {
            index: None,
            state: QueryState::default(),
            open: false,
        }
    }

    /// True when the index loaded and searches can run.
    pub fn is_enabled(&self) -> bool {
        self.index.is_some()
    }

    /// True while the search surface is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current query state, for rendering.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Open the search surface (trigger control or platform-modifier+K).
    ///
    /// The state is already pristine: `close` cleared it, and a session
    /// starts pristine. Opening is idempotent.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the surface and reset everything (Escape, overlay click, or
    /// the explicit close control).
    pub fn close(&mut self) {
        self.open = false;
        self.state.clear();
    }

    /// Handle a keystroke in the query input: recompute results in full.
    ///
    /// New results always reset the selection to idle.
    pub fn set_query(&mut self, raw_query: &str) {
        self.state.raw_query = raw_query.to_string();
        match &self.index {
            Some(index) => {
                let (terms, results) = search(index, raw_query);
                self.state.terms = terms;
                self.state.results = results;
            }
            None => {
                self.state.terms.clear();
                self.state.results.clear();
            }
        }
        self.state.selected = None;
    }

    /// Handle a navigation key while the surface is open.
    pub fn handle_key(&mut self, key: Key) -> Option<SessionEvent> {
        match key {
            Key::ArrowDown => {
                self.state.selected =
                    next_selection(self.state.selected, self.state.results.len());
                None
            }
            Key::ArrowUp => {
                self.state.selected =
                    prev_selection(self.state.selected, self.state.results.len());
                None
            }
            Key::Enter => {
                // Selected result wins; idle falls through to the top hit.
                let target = match self.state.selected {
                    Some(i) => self.state.results.get(i),
                    None => self.state.results.first(),
                };
                target.map(|doc| SessionEvent::Navigate(doc.url.clone()))
            }
            Key::Escape => {
                self.close();
                Some(SessionEvent::Closed)
            }
        }
    }
}
