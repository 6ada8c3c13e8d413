//! # Listing Actor
//!
//! This module defines the `ListingActor`, the component that owns one listing page's state:
//! the immutable collection, the filter criteria, the filtered sequence, the displayed window,
//! the pending timers and the scroll trigger. It processes messages sequentially, so none of
//! that state needs a lock.

use crate::client::ListingClient;
use crate::config::ListingConfig;
use crate::entity::Listable;
use crate::error::FrameworkError;
use crate::filter::{self, FilterCriteria};
use crate::message::{FilterChange, ListingRequest, TimerFired};
use crate::observer::{Region, ScrollTrigger, TriggerDeps, VisibilityObserver};
use crate::paginator::PageWindow;
use crate::scheduler::{Scheduler, TimerSlot};
use crate::view::{ListingView, Phase};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{self, WeakSender};
use tracing::{debug, info, warn};

/// The actor behind one listing page.
///
/// # Lifecycle
///
/// 1.  **Create**: `ListingActor::new()` generates nothing itself; it takes the collection and
///     returns the actor together with its `ListingClient`.
/// 2.  **Mount**: `run(observer)` injects the visibility capability and starts the loop. Mount
///     behaves like a filter change: the first page appears after the reset debounce.
/// 3.  **Unmount**: when every client is dropped the loop ends, pending timers are aborted and
///     the sentinel observation is detached.
///
/// ```rust
/// use listing_framework::{Listable, ListingActor, ListingConfig, NoopObserver};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)]
/// struct Paper { id: String, title: String }
///
/// impl Listable for Paper {
///     const KIND: &'static str = "paper";
///     fn id(&self) -> &str { &self.id }
///     fn title(&self) -> &str { &self.title }
///     fn author(&self) -> &str { "anonymous" }
///     fn category(&self) -> &str { "Physics" }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let papers = vec![Paper { id: "paper-0".into(), title: "On Motion".into() }];
///     let (actor, client) = ListingActor::new(papers, ListingConfig::default());
///     tokio::spawn(actor.run(Arc::new(NoopObserver)));
///
///     client.set_query("motion".into()).await.unwrap();
///     let view = client.view().await.unwrap();
///     assert_eq!(view.total, 1);
/// }
/// ```
///
/// # Generations
///
/// Every filter change (and the mount) bumps `generation` and schedules a reset tagged with it.
/// Timer messages whose tag is older than the current generation are discarded, so a reset
/// always wins over a page fetch that was in flight when the filters changed.
pub struct ListingActor<T: Listable> {
    receiver: mpsc::Receiver<ListingRequest<T>>,
    sender: WeakSender<ListingRequest<T>>,
    collection: Arc<[T]>,
    categories: Vec<String>,
    criteria: FilterCriteria,
    filtered: Arc<[T]>,
    window: PageWindow<T>,
    generation: u64,
    scheduler: Scheduler<ListingRequest<T>>,
    config: ListingConfig,
    region: Region,
}

impl<T: Listable> ListingActor<T> {
    /// Creates a listing over `collection` and its client.
    ///
    /// The collection is frozen here; filtering always works on derived copies. A zero
    /// `page_size` is raised to 1 so every accepted load makes progress.
    pub fn new(collection: Vec<T>, config: ListingConfig) -> (Self, ListingClient<T>) {
        if config.page_size == 0 {
            warn!(kind = T::KIND, "page_size 0 raised to 1");
        }
        let config = ListingConfig {
            page_size: config.page_size.max(1),
            ..config
        };
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let weak = sender.downgrade();
        let collection: Arc<[T]> = collection.into();
        let criteria = FilterCriteria::default();
        let filtered: Arc<[T]> = filter::apply(&collection, &criteria, T::SORTABLE).into();

        let actor = Self {
            receiver,
            sender: weak.clone(),
            categories: filter::categories(&collection),
            collection,
            criteria,
            window: PageWindow::new(filtered.clone()),
            filtered,
            generation: 0,
            scheduler: Scheduler::new(weak),
            region: Region::new(format!("{}s-sentinel", T::KIND)),
            config,
        };
        (actor, ListingClient::new(sender))
    }

    /// Runs the listing until every client is dropped.
    ///
    /// # Context Injection
    /// The `observer` is the host's visibility capability. It is injected here rather than in
    /// `new()` so the listing can be constructed before the host is ready.
    pub async fn run(mut self, observer: Arc<dyn VisibilityObserver>) {
        let kind = T::KIND;
        info!(kind, size = self.collection.len(), "Listing mounted");

        let mut trigger = ScrollTrigger::new(
            observer,
            self.region.clone(),
            self.config.visibility_threshold,
        );
        self.start_reset();
        self.sync_trigger(&mut trigger);

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ListingRequest::Filter { change, respond_to } => {
                    debug!(kind, ?change, "Filter");
                    let result = self.apply_change(change);
                    if let Err(e) = &result {
                        warn!(kind, error = %e, "Filter rejected");
                    }
                    let _ = respond_to.send(result);
                }
                ListingRequest::LoadMore { respond_to } => {
                    let accepted = self.load_more();
                    let _ = respond_to.send(Ok(accepted));
                }
                ListingRequest::View { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                }
                ListingRequest::Get { id, respond_to } => {
                    let item = self.collection.iter().find(|r| r.id() == id).cloned();
                    debug!(kind, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ListingRequest::SentinelVisible => {
                    debug!(kind, "Sentinel visible");
                    self.load_more();
                }
                ListingRequest::Timer(fired) => self.on_timer(fired),
            }
            self.sync_trigger(&mut trigger);
        }

        self.scheduler.cancel_all();
        trigger.detach();
        info!(kind, shown = self.window.len(), "Listing unmounted");
    }

    fn apply_change(&mut self, change: FilterChange) -> Result<(), FrameworkError> {
        let next = match change {
            FilterChange::Query(query) => FilterCriteria {
                query,
                ..self.criteria.clone()
            },
            FilterChange::Category(category) => FilterCriteria {
                category,
                ..self.criteria.clone()
            },
            FilterChange::Sort(sort) => {
                if !T::SORTABLE {
                    return Err(FrameworkError::SortUnsupported(T::KIND));
                }
                FilterCriteria {
                    sort,
                    ..self.criteria.clone()
                }
            }
            FilterChange::Clear => self.criteria.cleared(),
        };
        if next == self.criteria {
            debug!(kind = T::KIND, "Criteria unchanged");
            return Ok(());
        }

        self.criteria = next;
        self.filtered = filter::apply(&self.collection, &self.criteria, T::SORTABLE).into();
        // The page being fetched belongs to the old sequence.
        self.scheduler.cancel(TimerSlot::Load);
        self.start_reset();
        Ok(())
    }

    fn start_reset(&mut self) {
        self.generation += 1;
        self.window.begin_reset();
        self.scheduler.schedule(
            TimerSlot::Reset,
            self.config.reset_delay(),
            ListingRequest::Timer(TimerFired::Reset {
                generation: self.generation,
            }),
        );
        debug!(
            kind = T::KIND,
            generation = self.generation,
            total = self.filtered.len(),
            "Reset scheduled"
        );
    }

    fn load_more(&mut self) -> bool {
        if !self.window.begin_load() {
            debug!(
                kind = T::KIND,
                loading = self.window.is_loading(),
                has_more = self.window.has_more(),
                "Load rejected"
            );
            return false;
        }
        self.scheduler.schedule(
            TimerSlot::Load,
            self.config.load_delay(),
            ListingRequest::Timer(TimerFired::Load {
                generation: self.generation,
            }),
        );
        debug!(kind = T::KIND, shown = self.window.len(), "Load scheduled");
        true
    }

    fn on_timer(&mut self, fired: TimerFired) {
        let kind = T::KIND;
        match fired {
            TimerFired::Reset { generation } if generation == self.generation => {
                self.scheduler.complete(TimerSlot::Reset);
                self.window
                    .reset(self.filtered.clone(), self.config.page_size);
                info!(
                    kind,
                    generation,
                    shown = self.window.len(),
                    total = self.filtered.len(),
                    "Window reset"
                );
            }
            TimerFired::Load { generation } if generation == self.generation => {
                self.scheduler.complete(TimerSlot::Load);
                let added = self.window.append_page(self.config.page_size);
                info!(
                    kind,
                    added,
                    shown = self.window.len(),
                    total = self.window.base_len(),
                    "Page loaded"
                );
            }
            stale => {
                debug!(kind, ?stale, current = self.generation, "Stale timer discarded");
            }
        }
    }

    fn phase(&self) -> Phase {
        if self.scheduler.is_pending(TimerSlot::Reset) {
            Phase::Resetting
        } else if self.scheduler.is_pending(TimerSlot::Load) {
            Phase::LoadingMore
        } else {
            Phase::Idle
        }
    }

    fn view(&self) -> ListingView<T> {
        ListingView {
            items: self.window.displayed().to_vec(),
            total: self.filtered.len(),
            loading: self.window.is_loading(),
            has_more: self.window.has_more(),
            phase: self.phase(),
            criteria: self.criteria.clone(),
            categories: self.categories.clone(),
        }
    }

    fn sync_trigger(&self, trigger: &mut ScrollTrigger) {
        let deps = TriggerDeps {
            has_more: self.window.has_more(),
            loading: self.window.is_loading(),
        };
        let sender = self.sender.clone();
        trigger.sync(deps, move || {
            if let Some(sender) = sender.upgrade() {
                post(&sender, ListingRequest::SentinelVisible, T::KIND);
            }
        });
    }
}

/// Delivers `message` from a synchronous callback. A full channel defers delivery to a
/// spawned send instead of dropping it, since the trigger will not fire again until
/// visibility changes.
fn post<M: Send + 'static>(sender: &mpsc::Sender<M>, message: M, kind: &'static str) {
    match sender.try_send(message) {
        Ok(()) => {}
        Err(TrySendError::Full(message)) => match Handle::try_current() {
            Ok(handle) => {
                warn!(kind, "Listing busy, sentinel event deferred");
                let sender = sender.clone();
                handle.spawn(async move {
                    let _ = sender.send(message).await;
                });
            }
            Err(_) => warn!(kind, "Sentinel event dropped outside the runtime"),
        },
        Err(TrySendError::Closed(_)) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_defers_when_channel_is_full() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        post(&tx, 1, "sheet");
        post(&tx, 2, "sheet");

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test]
    async fn test_post_to_closed_channel_is_silent() {
        let (tx, rx) = mpsc::channel::<u32>(1);
        drop(rx);
        post(&tx, 1, "sheet");
    }
}
