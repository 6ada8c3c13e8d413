//! # Book Listing
//!
//! The Books page: a [`ListingActor`] over [`Book`] records with search, subject filter and
//! title sort.
//!
//! ## Structure
//!
//! - [`entity`] - [`Listable`](listing_framework::Listable) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the listing and its client
//!
//! ## Usage
//!
//! ```rust
//! use listing_framework::{ListingConfig, NoopObserver};
//! use shelf_app::book_listing;
//! use shelf_app::generator::generate_books;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let books = generate_books(100, &mut rand::thread_rng());
//!     let (actor, client) = book_listing::new(books, ListingConfig::default());
//!
//!     // The host's viewport is injected at run time.
//!     tokio::spawn(actor.run(Arc::new(NoopObserver)));
//!
//!     client.search("algorithms").await?;
//!     client.filter_by_subject("Computer Science").await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::model::Book;
use listing_framework::{ListingActor, ListingConfig};

/// Creates a new Book listing and its client.
pub fn new(books: Vec<Book>, config: ListingConfig) -> (ListingActor<Book>, BookClient) {
    let (actor, generic_client) = ListingActor::new(books, config);
    (actor, BookClient::new(generic_client))
}
