//! # Listing Framework
//!
//! This crate provides the building blocks for browsable catalogue pages: a search box, a
//! category picker, an optional title sort and an infinitely scrolling grid that grows one
//! page at a time.
//!
//! ## Architecture Overview
//!
//! Each listing page is an **actor**: a Tokio task that exclusively owns the page's state and
//! processes requests one at a time. The framework separates concerns into layers:
//!
//! 1. **Record Layer** ([`Listable`]) - what a record exposes to search and sort
//! 2. **Pure Layer** ([`filter`], [`paginator`]) - the filter/sort engine and the displayed window
//! 3. **Runtime Layer** ([`ListingActor`], [`scheduler`], [`observer`]) - debounce and fetch
//!    timers, generation checks and the scroll trigger
//! 4. **Interface Layer** ([`ListingClient`], [`ListingHandle`]) - type-safe communication
//!
//! ## Pipeline
//!
//! ```text
//! collection ──filter::apply(criteria)──▶ filtered ──reset (500 ms)──▶ window[..10]
//!                                                   ──load  (800 ms)──▶ window[..20] …
//! ```
//!
//! - A filter edit recomputes the filtered sequence at once and schedules a debounced reset.
//!   Edits inside the debounce supersede each other; only the last one lands.
//! - A load is accepted only when the window is idle and more items remain.
//! - A reset always wins: a page fetch that was in flight when the filters changed is
//!   discarded.
//!
//! ## Concurrency Model
//!
//! - Requests, timer completions and visibility callbacks all arrive on the listing's channel
//!   and are handled sequentially. No locks guard listing state.
//! - Timers and visibility callbacks hold weak senders; dropping the last client unmounts the
//!   listing, aborting its timers and detaching its sentinel.
//! - Listings share nothing with each other.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockObserver`](mock::MockObserver) that fires visibility
//! events synchronously, and a [`MockListing`](mock::MockListing) for testing client
//! wrappers without a running listing.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod message;
pub mod mock;
pub mod observer;
pub mod paginator;
pub mod scheduler;
pub mod tracing;
pub mod view;

// Re-export core types for convenience
pub use actor::ListingActor;
pub use client::ListingClient;
pub use client_trait::ListingHandle;
pub use config::ListingConfig;
pub use entity::Listable;
pub use error::{ConfigError, FrameworkError};
pub use filter::{CategorySelector, FilterCriteria, SortOrder};
pub use message::{FilterChange, ListingRequest, Response};
pub use observer::{NoopObserver, Region, VisibilityEvent, VisibilityObserver};
pub use view::{ListingView, Phase};
