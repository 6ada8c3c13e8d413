//! # Delayed Tasks
//!
//! The listing's two suspension points (the reset debounce and the load-more delay) are
//! spawned sleep tasks that post a message back into the listing's own channel.
//!
//! Each pending task lives in a named slot ([`TimerSlot`] for listings; any small `Copy`
//! key works for other owners). Scheduling into an occupied slot aborts
//! the previous task, which is how a burst of filter changes collapses into one trailing
//! reset. Messages carry the listing's generation, so a task that slipped past the abort is
//! still discarded when it arrives.
//!
//! Tasks hold a [`WeakSender`]: a pending timer never keeps a listing alive after its last
//! client is dropped.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;
use tokio::sync::mpsc::WeakSender;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Reset,
    Load,
}

pub struct Scheduler<M, S = TimerSlot> {
    sender: WeakSender<M>,
    pending: HashMap<S, JoinHandle<()>>,
}

impl<M: Send + 'static, S: Copy + Eq + Hash + Debug> Scheduler<M, S> {
    pub fn new(sender: WeakSender<M>) -> Self {
        Self {
            sender,
            pending: HashMap::new(),
        }
    }

    /// Posts `message` after `delay`, superseding whatever was pending in `slot`.
    pub fn schedule(&mut self, slot: S, delay: Duration, message: M) {
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender.send(message).await;
            }
        });
        if let Some(previous) = self.pending.insert(slot, handle) {
            trace!(?slot, "Superseded pending timer");
            previous.abort();
        }
    }

    /// Forgets a slot once its message has been delivered.
    pub fn complete(&mut self, slot: S) {
        self.pending.remove(&slot);
    }

    pub fn cancel(&mut self, slot: S) {
        if let Some(handle) = self.pending.remove(&slot) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }

    pub fn is_pending(&self, slot: S) -> bool {
        self.pending.contains_key(&slot)
    }
}

impl<M, S> Drop for Scheduler<M, S> {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}
