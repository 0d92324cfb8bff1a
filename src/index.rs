//! Index loading: turning build-time data into a [`SearchIndex`].
//!
//! The site generator embeds a JSON array of document records in every page.
//! Parsing happens once per page view; a malformed payload is a build bug,
//! so the session layer logs it and disables search for the whole session
//! rather than surfacing an error state to the reader.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::types::SearchIndex;

/// Why an index failed to load.
#[derive(Debug)]
pub enum IndexError {
    /// The payload was not valid JSON or did not match the document schema.
    Malformed(serde_json::Error),
    /// The index file could not be read at all.
    Unreadable(std::io::Error),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Malformed(err) => write!(f, "malformed search index: {}", err),
            IndexError::Unreadable(err) => write!(f, "unreadable search index: {}", err),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Malformed(err) => Some(err),
            IndexError::Unreadable(err) => Some(err),
        }
    }
}

impl SearchIndex {
    /// Parse an index from its serialized JSON form.
    pub fn from_json(raw: &str) -> Result<SearchIndex, IndexError> {
        serde_json::from_str(raw).map_err(IndexError::Malformed)
    }

    /// Read and parse an index file.
    pub fn from_path(path: &Path) -> Result<SearchIndex, IndexError> {
        let raw = fs::read_to_string(path).map_err(IndexError::Unreadable)?;
        SearchIndex::from_json(&raw)
    }
}
