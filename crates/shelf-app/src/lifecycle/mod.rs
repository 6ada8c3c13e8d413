//! # System Lifecycle
//!
//! Wires the shelf together and takes it apart again.
//!
//! ## Startup
//!
//! [`ShelfSystem`] creates the Books listing, the Notes listing and the upload desk, then
//! spawns each with the capability it needs injected through `run`:
//!
//! | Actor | Injected at `run` |
//! |-------|-------------------|
//! | Book listing | `Arc<dyn VisibilityObserver>` for its sentinel |
//! | Note listing | the same observer |
//! | Upload desk | `Arc<dyn Navigator>` for the post-upload redirect |
//!
//! Each listing mount generates its own collection; nothing is cached between mounts.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - pending timers are aborted and sentinels unobserved
//! 4. **Await completion** - every task handle is joined
//!
//! Timers and visibility callbacks hold weak senders only, so they never keep an actor alive.
//! Clones of a client held elsewhere do: shutdown waits until those are dropped too.

pub mod shelf_system;

pub use shelf_system::*;
