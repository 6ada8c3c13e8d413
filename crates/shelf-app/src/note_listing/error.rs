//! Error types for the Note listing.

use thiserror::Error;

/// Errors that can occur while browsing notes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NoteError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    /// Notes are always listed in ascending title order.
    #[error("Notes cannot be re-sorted")]
    SortUnsupported,

    #[error("Listing error: {0}")]
    ListingError(String),
}

impl From<String> for NoteError {
    fn from(msg: String) -> Self {
        NoteError::ListingError(msg)
    }
}
