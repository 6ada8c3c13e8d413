//! # Paginator
//!
//! [`PageWindow`] is the displayed window over a filtered sequence. It holds the sequence it
//! was cut from (`base`) and how many leading items are shown, so the displayed items are a
//! prefix of `base` by construction.
//!
//! The window never decides *when* to grow; the listing actor drives it:
//!
//! - [`PageWindow::begin_reset`] marks the window busy while a debounced reset is pending.
//! - [`PageWindow::reset`] swaps in a new base and shows its first page.
//! - [`PageWindow::begin_load`] applies the busy/exhausted guard before a load.
//! - [`PageWindow::append_page`] shows the next page and clears the busy flag.

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PageWindow<T> {
    base: Arc<[T]>,
    shown: usize,
    loading: bool,
}

impl<T: Clone> PageWindow<T> {
    /// An empty window over `base`, not yet showing anything.
    pub fn new(base: Arc<[T]>) -> Self {
        Self {
            base,
            shown: 0,
            loading: false,
        }
    }

    pub fn displayed(&self) -> &[T] {
        &self.base[..self.shown]
    }

    pub fn len(&self) -> usize {
        self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// Length of the sequence this window was cut from.
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.base.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_reset(&mut self) {
        self.loading = true;
    }

    /// Replaces the base and shows its first `page_size` items (or fewer).
    pub fn reset(&mut self, base: Arc<[T]>, page_size: usize) {
        self.shown = page_size.min(base.len());
        self.base = base;
        self.loading = false;
    }

    /// Guard for a load. Returns `false` without touching state when a load or reset is
    /// already in progress or nothing remains; otherwise marks the window busy.
    pub fn begin_load(&mut self) -> bool {
        if self.loading || !self.has_more() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Shows up to `page_size` more items. Returns how many were added.
    pub fn append_page(&mut self, page_size: usize) -> usize {
        let before = self.shown;
        self.shown = (self.shown + page_size).min(self.base.len());
        self.loading = false;
        self.shown - before
    }
}
