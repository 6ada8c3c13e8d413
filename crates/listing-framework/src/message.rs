//! # Listing Messages
//!
//! This module defines the message types exchanged between a `ListingClient` and its
//! `ListingActor`, plus the internal messages the actor posts to itself from timers and
//! visibility callbacks.

use crate::entity::Listable;
use crate::error::FrameworkError;
use crate::filter::{CategorySelector, SortOrder};
use crate::view::ListingView;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by listings.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A user edit to the filter state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Query(String),
    Category(CategorySelector),
    Sort(SortOrder),
    /// Query back to empty and category back to `All`.
    Clear,
}

/// Timer completions. Each carries the generation it was scheduled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFired {
    Reset { generation: u64 },
    Load { generation: u64 },
}

/// Requests processed sequentially by a `ListingActor`.
///
/// The first four variants come from clients and answer through `respond_to`. The last two
/// are posted by the listing itself and need no reply.
#[derive(Debug)]
pub enum ListingRequest<T: Listable> {
    Filter {
        change: FilterChange,
        respond_to: Response<()>,
    },
    LoadMore {
        respond_to: Response<bool>,
    },
    View {
        respond_to: Response<ListingView<T>>,
    },
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    SentinelVisible,
    Timer(TimerFired),
}
