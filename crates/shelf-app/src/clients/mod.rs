//! Typed clients: kind-specific wrappers around the generic
//! [`ListingClient`](listing_framework::ListingClient), and the upload desk's client.

pub mod book_client;
pub mod note_client;
pub mod upload_client;

pub use book_client::*;
pub use note_client::*;
pub use upload_client::*;
