//! # Book Client
//!
//! Provides a high-level API for the Books page.
//! It wraps a `ListingClient<Book>` and exposes domain-specific methods.
use crate::book_listing::BookError;
use crate::model::{Book, Subject};
use async_trait::async_trait;
use listing_framework::{CategorySelector, FrameworkError, ListingClient, ListingHandle, SortOrder};
use tracing::{debug, instrument};

/// Client for interacting with the Book listing.
#[derive(Clone)]
pub struct BookClient {
    inner: ListingClient<Book>,
}

impl BookClient {
    pub fn new(inner: ListingClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ListingHandle<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ListingClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            other => BookError::ListingError(other.to_string()),
        }
    }
}

impl BookClient {
    /// Updates the search box. Matches title or author, case-insensitively.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: impl Into<String>) -> Result<(), BookError> {
        debug!("Sending request");
        self.inner
            .set_query(query.into())
            .await
            .map_err(Self::map_error)
    }

    /// Selects a subject by display name; `"All"` shows every subject.
    #[instrument(skip(self))]
    pub async fn filter_by_subject(&self, subject: &str) -> Result<(), BookError> {
        let selector = match CategorySelector::from(subject) {
            CategorySelector::All => CategorySelector::All,
            CategorySelector::Only(name) => {
                let subject = name
                    .parse::<Subject>()
                    .map_err(|_| BookError::UnknownSubject(name))?;
                CategorySelector::Only(subject.name().to_string())
            }
        };
        debug!("Sending request");
        self.inner
            .set_category(selector)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn sort_by_title(&self, order: SortOrder) -> Result<(), BookError> {
        debug!("Sending request");
        self.inner
            .set_sort_order(order)
            .await
            .map_err(Self::map_error)
    }

    /// Looks up a single book for the detail view.
    #[instrument(skip(self))]
    pub async fn book(&self, id: &str) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner
            .require(id.to_string())
            .await
            .map_err(Self::map_error)
    }
}
