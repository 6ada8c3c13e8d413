//! # Listing Snapshot
//!
//! [`ListingView`] is what a page renders: the displayed window, the size of the current
//! match set, the busy/exhausted flags and the filter state that produced them.

use crate::filter::FilterCriteria;
use serde::Serialize;

/// Where the listing sits in its composed state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    /// A filter change is waiting out the debounce.
    Resetting,
    /// A page is being fetched.
    LoadingMore,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingView<T> {
    pub items: Vec<T>,
    /// Matches for the current criteria (the stats badge). May run ahead of `items` while a
    /// reset is pending.
    pub total: usize,
    pub loading: bool,
    pub has_more: bool,
    pub phase: Phase,
    pub criteria: FilterCriteria,
    pub categories: Vec<String>,
}

impl<T> ListingView<T> {
    /// The empty-state panel replaces the grid once nothing is loading and nothing is shown.
    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
