//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every listing in the process.
//!
//! ## What Gets Traced
//!
//! - **Lifecycle**: `Listing mounted` / `Listing unmounted` with the record `kind`
//! - **Filter edits**: the change, rejected sort requests, unchanged criteria
//! - **Timers**: `Reset scheduled`, `Window reset`, `Load scheduled`, `Page loaded`, and
//!   `Stale timer discarded` with both generations
//! - **Scroll trigger**: sentinel observed/unobserved with the deps it captured
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # window resets and page loads
//! RUST_LOG=debug cargo run     # every request, guard decision and timer
//! ```
//!
//! Without `RUST_LOG`, `info` is used.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init: a second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // `kind` identifies the listing; module paths add nothing
        .compact()
        .try_init();
}
