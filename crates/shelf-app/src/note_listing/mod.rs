//! # Note Listing
//!
//! The Notes page: a [`ListingActor`] over [`Note`] records. Notes are searched and filtered
//! like books but always stay in ascending title order; a sort request is rejected.
//!
//! ## Structure
//!
//! - [`entity`] - [`Listable`](listing_framework::Listable) implementation for [`Note`]
//! - [`error`] - [`NoteError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the listing and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::NoteClient;
use crate::model::Note;
use listing_framework::{ListingActor, ListingConfig};

/// Creates a new Note listing and its client.
pub fn new(notes: Vec<Note>, config: ListingConfig) -> (ListingActor<Note>, NoteClient) {
    let (actor, generic_client) = ListingActor::new(notes, config);
    (actor, NoteClient::new(generic_client))
}
