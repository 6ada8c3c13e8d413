//! Error types for the upload desk.

use thiserror::Error;

/// Errors that can occur while submitting a resource.
///
/// Validation errors are raised synchronously and leave the form untouched; the visitor fixes
/// the field and submits again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    /// A required field is empty, or no file was attached.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Page count or year is not a positive whole number.
    #[error("{field} must be a positive whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The desk is still processing the previous submission or showing its banner.
    #[error("An upload is already in progress")]
    Busy,

    #[error("Upload desk error: {0}")]
    DeskError(String),
}

impl From<String> for UploadError {
    fn from(msg: String) -> Self {
        UploadError::DeskError(msg)
    }
}
