//! Error types for the Book listing.

use thiserror::Error;

/// Errors that can occur while browsing books.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// No book carries the requested id.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The subject name is not one the catalogue knows.
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    /// An error occurred while communicating with the listing.
    #[error("Listing error: {0}")]
    ListingError(String),
}

impl From<String> for BookError {
    fn from(msg: String) -> Self {
        BookError::ListingError(msg)
    }
}
