//! # Scroll Trigger
//!
//! Incremental loading is driven by the visibility of a sentinel region placed after the last
//! card. The host environment reports visibility through the [`VisibilityObserver`]
//! capability; a listing never polls.
//!
//! [`ScrollTrigger`] keeps at most one observation per listing. Whenever the listing's
//! `has_more`/`loading` pair changes, the observation is detached and, if the sentinel is
//! still rendered (`has_more`), attached again with a callback that captured the new pair.
//! Teardown detaches it for good.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Identifies an observable region (e.g. `"books-sentinel"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A visibility change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub intersecting: bool,
    /// Fraction of the region inside the viewport, in `[0, 1]`.
    pub ratio: f32,
}

impl VisibilityEvent {
    pub fn visible(ratio: f32) -> Self {
        Self {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }
}

pub type VisibilityCallback = Arc<dyn Fn(VisibilityEvent) + Send + Sync>;

/// Host capability that reports when a region crosses a visibility threshold.
pub trait VisibilityObserver: Send + Sync {
    fn observe(&self, region: &Region, threshold: f32, callback: VisibilityCallback);
    fn unobserve(&self, region: &Region);
}

/// An observer for hosts without a viewport. Nothing is ever reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisibilityObserver for NoopObserver {
    fn observe(&self, _region: &Region, _threshold: f32, _callback: VisibilityCallback) {}
    fn unobserve(&self, _region: &Region) {}
}

/// The listing state the trigger's callback depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerDeps {
    pub has_more: bool,
    pub loading: bool,
}

impl TriggerDeps {
    /// Whether an intersecting sentinel should request a page.
    pub fn wants_page(&self) -> bool {
        self.has_more && !self.loading
    }
}

pub struct ScrollTrigger {
    observer: Arc<dyn VisibilityObserver>,
    region: Region,
    threshold: f32,
    deps: Option<TriggerDeps>,
    attached: bool,
}

impl ScrollTrigger {
    pub fn new(observer: Arc<dyn VisibilityObserver>, region: Region, threshold: f32) -> Self {
        Self {
            observer,
            region,
            threshold,
            deps: None,
            attached: false,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Re-arms the observation for `deps`. `request_page` is invoked from the host's callback
    /// when the sentinel intersects and `deps` allowed a load at the time it was armed.
    ///
    /// Unchanged deps leave the current observation in place.
    pub fn sync<F>(&mut self, deps: TriggerDeps, request_page: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.deps == Some(deps) {
            return;
        }
        self.detach();
        self.deps = Some(deps);

        // No sentinel is rendered once everything is shown.
        if !deps.has_more {
            return;
        }

        let threshold = self.threshold;
        let callback: VisibilityCallback = Arc::new(move |event: VisibilityEvent| {
            if event.intersecting && event.ratio >= threshold && deps.wants_page() {
                request_page();
            }
        });
        self.observer.observe(&self.region, threshold, callback);
        self.attached = true;
        debug!(region = %self.region, ?deps, "Sentinel observed");
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.observer.unobserve(&self.region);
            self.attached = false;
            debug!(region = %self.region, "Sentinel unobserved");
        }
    }
}

impl Drop for ScrollTrigger {
    fn drop(&mut self) {
        self.detach();
    }
}
