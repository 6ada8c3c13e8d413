//! # Test Doubles
//!
//! Two kinds of doubles live here:
//!
//! - [`MockObserver`] stands in for the host's viewport. Tests call [`MockObserver::fire`] to
//!   deliver a visibility event synchronously to whatever callback the listing registered.
//! - [`MockListing`] and [`create_mock_client`] stand in for a running listing so that client
//!   wrappers can be tested without spawning a `ListingActor`.
//!
//! ## When to use Mocks vs a Real Listing
//!
//! | Feature | MockListing | Real ListingActor |
//! |---------|-------------|-------------------|
//! | **Timers** | None | Debounce and fetch delays (use `start_paused`) |
//! | **State** | Canned replies | Real filter/paginate state |
//! | **Use Case** | Logic *around* the client | The listing itself or the full system |
//!
//! ## Driving a listing with a MockObserver
//!
//! ```rust
//! use listing_framework::mock::MockObserver;
//! use listing_framework::{Listable, ListingActor, ListingConfig, Region};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[derive(Clone, Debug)]
//! struct Paper { id: String }
//!
//! impl Listable for Paper {
//!     const KIND: &'static str = "paper";
//!     fn id(&self) -> &str { &self.id }
//!     fn title(&self) -> &str { &self.id }
//!     fn author(&self) -> &str { "" }
//!     fn category(&self) -> &str { "" }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let papers = (0..25).map(|i| Paper { id: format!("paper-{i}") }).collect();
//!     let config = ListingConfig { reset_delay_ms: 1, load_delay_ms: 1, ..Default::default() };
//!     let observer = Arc::new(MockObserver::new());
//!
//!     let (actor, client) = ListingActor::new(papers, config);
//!     tokio::spawn(actor.run(observer.clone()));
//!
//!     tokio::time::sleep(Duration::from_millis(20)).await;
//!     observer.scroll_into_view(&Region::new("papers-sentinel"));
//!     tokio::time::sleep(Duration::from_millis(20)).await;
//!
//!     assert_eq!(client.view().await.unwrap().items.len(), 20);
//! }
//! ```

use crate::client::ListingClient;
use crate::entity::Listable;
use crate::error::FrameworkError;
use crate::message::{FilterChange, ListingRequest};
use crate::observer::{Region, VisibilityCallback, VisibilityEvent, VisibilityObserver};
use crate::view::ListingView;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// VISIBILITY DOUBLE
// =============================================================================

/// A viewport that only changes when a test says so.
#[derive(Default)]
pub struct MockObserver {
    observed: Mutex<HashMap<Region, (f32, VisibilityCallback)>>,
    observe_calls: AtomicUsize,
    unobserve_calls: AtomicUsize,
}

impl MockObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn observed(&self) -> MutexGuard<'_, HashMap<Region, (f32, VisibilityCallback)>> {
        self.observed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Delivers `event` to the callback registered for `region`.
    ///
    /// Returns `false` when nothing observes the region (no sentinel rendered).
    pub fn fire(&self, region: &Region, event: VisibilityEvent) -> bool {
        // Clone out so the callback runs without the lock held.
        let callback = self.observed().get(region).map(|(_, cb)| cb.clone());
        match callback {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }

    /// Shorthand for a fully visible sentinel.
    pub fn scroll_into_view(&self, region: &Region) -> bool {
        self.fire(region, VisibilityEvent::visible(1.0))
    }

    /// Number of regions currently observed.
    pub fn active(&self) -> usize {
        self.observed().len()
    }

    pub fn is_observing(&self, region: &Region) -> bool {
        self.observed().contains_key(region)
    }

    pub fn threshold(&self, region: &Region) -> Option<f32> {
        self.observed().get(region).map(|(threshold, _)| *threshold)
    }

    pub fn observe_calls(&self) -> usize {
        self.observe_calls.load(Ordering::SeqCst)
    }

    pub fn unobserve_calls(&self) -> usize {
        self.unobserve_calls.load(Ordering::SeqCst)
    }
}

impl VisibilityObserver for MockObserver {
    fn observe(&self, region: &Region, threshold: f32, callback: VisibilityCallback) {
        self.observe_calls.fetch_add(1, Ordering::SeqCst);
        self.observed()
            .insert(region.clone(), (threshold, callback));
    }

    fn unobserve(&self, region: &Region) {
        self.unobserve_calls.fetch_add(1, Ordering::SeqCst);
        self.observed().remove(region);
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock listing.
enum Expectation<T: Listable> {
    Filter {
        response: Result<(), FrameworkError>,
    },
    LoadMore {
        response: Result<bool, FrameworkError>,
    },
    View {
        response: Result<ListingView<T>, FrameworkError>,
    },
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: Listable>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(expectation);
}

/// A mock listing with expectation tracking for fluent testing.
///
/// Requests are answered in order from the queued expectations. Filter changes are also
/// recorded so tests can assert on what the client sent.
pub struct MockListing<T: Listable> {
    client: ListingClient<T>,
    expectations: Expectations<T>,
    changes: Arc<Mutex<Vec<FilterChange>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Listable> Default for MockListing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listable> MockListing<T> {
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ListingRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let changes = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let changes_clone = changes.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (
                        ListingRequest::Filter { change, respond_to },
                        Some(Expectation::Filter { response }),
                    ) => {
                        changes_clone
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(change);
                        let _ = respond_to.send(response);
                    }
                    (
                        ListingRequest::LoadMore { respond_to },
                        Some(Expectation::LoadMore { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ListingRequest::View { respond_to },
                        Some(Expectation::View { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ListingRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ListingClient::new(sender),
            expectations,
            changes,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ListingClient<T> {
        self.client.clone()
    }

    pub fn expect_filter(&mut self, response: Result<(), FrameworkError>) {
        push(&self.expectations, Expectation::Filter { response });
    }

    pub fn expect_load_more(&mut self, response: Result<bool, FrameworkError>) {
        push(&self.expectations, Expectation::LoadMore { response });
    }

    pub fn expect_view(&mut self, response: Result<ListingView<T>, FrameworkError>) {
        push(&self.expectations, Expectation::View { response });
    }

    pub fn expect_get(&mut self, response: Result<Option<T>, FrameworkError>) {
        push(&self.expectations, Expectation::Get { response });
    }

    /// Filter changes received so far, in order.
    pub fn changes(&self) -> Vec<FilterChange> {
        self.changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests pull requests off the receiver with the `expect_*` helpers and answer them by hand,
/// which makes it easy to hold a reply back or answer with an error.
pub fn create_mock_client<T: Listable>(
    buffer_size: usize,
) -> (ListingClient<T>, mpsc::Receiver<ListingRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ListingClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Filter request
pub async fn expect_filter<T: Listable>(
    receiver: &mut mpsc::Receiver<ListingRequest<T>>,
) -> Option<(FilterChange, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ListingRequest::Filter { change, respond_to }) => Some((change, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Listable>(
    receiver: &mut mpsc::Receiver<ListingRequest<T>>,
) -> Option<(String, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ListingRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
