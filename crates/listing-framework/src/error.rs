//! # Framework Errors
//!
//! This module defines the common error types used throughout the listing framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all listings and clients.
//!
//! Note that an empty result set is *not* an error: the filter engine never fails, and
//! a listing with zero matches is a valid state rendered as an empty-state view.

/// Errors that can occur within the listing framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Listing closed")]
    ActorClosed,
    #[error("Listing dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Sorting is not supported for {0} listings")]
    SortUnsupported(&'static str),
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(String),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
