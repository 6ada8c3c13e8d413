//! # Listable Trait
//!
//! The `Listable` trait is the contract every record (Book, Note, …) must satisfy to be
//! browsed by the generic `ListingActor`. It exposes the handful of fields the filter engine
//! reads (title, author, category) plus the stable identifier used for detail lookups.
//!
//! # Architecture Note
//! By defining one contract that all our resource types must satisfy, we write the listing
//! pipeline (filter, sort, paginate, scroll trigger) *once* and reuse it for every page.
//! The records themselves stay plain data; the actor never mutates them.
//!
//! # Associated Constants
//! - [`Listable::KIND`] names the record kind in ids, logs and error messages.
//! - [`Listable::SORTABLE`] says whether the listing honours a descending sort. Listings that
//!   are not sortable are always ordered ascending by title.

use std::fmt::Debug;

/// Trait that any record must implement to be managed by a `ListingActor`.
pub trait Listable: Clone + Send + Sync + Debug + 'static {
    /// Short lowercase name of the record kind (e.g. `"book"`). Used as the id prefix.
    const KIND: &'static str;

    /// Whether the listing accepts a sort order other than ascending.
    const SORTABLE: bool = true;

    /// Stable identifier, unique within a collection.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn author(&self) -> &str;

    /// Display name of the category this record belongs to.
    fn category(&self) -> &str;
}
