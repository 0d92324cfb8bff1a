//! Incremental client-side search for static blogs.
//!
//! This crate implements the search engine a static site embeds in every
//! page: a build-time document index, scored multi-term matching, and a
//! keyboard-driven result list with a strict open/query/close lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│  scoring.rs  │────▶│  search.rs  │
//! │  (Document, │     │   (score)    │     │(rank,search)│
//! │ QueryState) │     └──────────────┘     └─────────────┘
//! └─────────────┘                                 │
//!        │                                        ▼
//!        │            ┌──────────────┐     ┌─────────────┐
//!        └───────────▶│  session.rs  │────▶│  render.rs  │
//!                     │ (keyboard    │     │ (fragment,  │
//!                     │  state machine)    │  highlight) │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! Everything is synchronous and single-threaded: each keystroke rescans
//! the index, recomputes the results, and re-renders the fragment before
//! the next event is handled.
//!
//! # Usage
//!
//! ```
//! use lantern::{render, Key, SearchSession};
//!
//! let payload = r#"[{"title": "Rust Basics", "url": "/posts/rust-basics/",
//!                    "date": 1700000000, "tags": ["rust"]}]"#;
//! let mut session = SearchSession::from_json(payload);
//!
//! session.open();
//! session.set_query("rust");
//! let fragment = render(session.state());
//! assert!(fragment.html.contains("<mark>Rust</mark>"));
//!
//! session.handle_key(Key::ArrowDown);
//! # assert_eq!(session.state().selected, Some(0));
//! ```

// Module declarations
mod index;
mod render;
mod scoring;
mod search;
mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use index::IndexError;
pub use render::{highlight, render, Fragment};
pub use scoring::{
    score, WEIGHT_CATEGORY, WEIGHT_CONTENT, WEIGHT_EXCERPT, WEIGHT_TAG, WEIGHT_TITLE,
    WEIGHT_TITLE_EXACT,
};
pub use search::{rank, search, MAX_RESULTS, MIN_QUERY_LEN};
pub use session::{next_selection, prev_selection, Key, SearchSession, SessionEvent};
pub use types::{Document, QueryState, SearchIndex};
pub use utils::{normalize, tokenize};
