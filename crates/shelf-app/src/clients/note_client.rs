//! # Note Client
//!
//! Provides a high-level API for the Notes page.
//! It wraps a `ListingClient<Note>` and exposes domain-specific methods.
use crate::model::{Note, Subject};
use crate::note_listing::NoteError;
use async_trait::async_trait;
use listing_framework::{CategorySelector, FrameworkError, ListingClient, ListingHandle, SortOrder};
use tracing::{debug, instrument};

/// Client for interacting with the Note listing.
#[derive(Clone)]
pub struct NoteClient {
    inner: ListingClient<Note>,
}

impl NoteClient {
    pub fn new(inner: ListingClient<Note>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ListingHandle<Note> for NoteClient {
    type Error = NoteError;

    fn inner(&self) -> &ListingClient<Note> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => NoteError::NotFound(id),
            FrameworkError::SortUnsupported(_) => NoteError::SortUnsupported,
            other => NoteError::ListingError(other.to_string()),
        }
    }
}

impl NoteClient {
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: impl Into<String>) -> Result<(), NoteError> {
        debug!("Sending request");
        self.inner
            .set_query(query.into())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn filter_by_subject(&self, subject: &str) -> Result<(), NoteError> {
        let selector = match CategorySelector::from(subject) {
            CategorySelector::All => CategorySelector::All,
            CategorySelector::Only(name) => {
                let subject = name
                    .parse::<Subject>()
                    .map_err(|_| NoteError::UnknownSubject(name))?;
                CategorySelector::Only(subject.name().to_string())
            }
        };
        debug!("Sending request");
        self.inner
            .set_category(selector)
            .await
            .map_err(Self::map_error)
    }

    /// Always fails with [`NoteError::SortUnsupported`]; kept so both pages share one surface.
    #[instrument(skip(self))]
    pub async fn sort_by_title(&self, order: SortOrder) -> Result<(), NoteError> {
        debug!("Sending request");
        self.inner
            .set_sort_order(order)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn note(&self, id: &str) -> Result<Note, NoteError> {
        debug!("Sending request");
        self.inner
            .require(id.to_string())
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentType;
    use listing_framework::mock::MockListing;
    use listing_framework::FilterChange;

    #[tokio::test]
    async fn test_sort_rejection_maps_to_note_error() {
        let mut mock = MockListing::<Note>::new();
        mock.expect_filter(Err(FrameworkError::SortUnsupported("note")));

        let client = NoteClient::new(mock.client());
        let result = client.sort_by_title(SortOrder::Desc).await;

        assert_eq!(result, Err(NoteError::SortUnsupported));
        assert_eq!(mock.changes(), vec![FilterChange::Sort(SortOrder::Desc)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_note_lookup_returns_record() {
        let mut mock = MockListing::<Note>::new();
        let note = Note::new(
            3,
            "Linear Algebra Cheat Sheet - Part 1",
            "Student 3",
            Subject::History,
            DocumentType::Ppt,
        );
        mock.expect_get(Ok(Some(note.clone())));

        let client = NoteClient::new(mock.client());
        assert_eq!(client.note("note-3").await, Ok(note));
        mock.verify();
    }

    #[tokio::test]
    async fn test_note_lookup_maps_missing_to_not_found() {
        let mut mock = MockListing::<Note>::new();
        mock.expect_get(Ok(None));

        let client = NoteClient::new(mock.client());
        assert_eq!(
            client.note("note-404").await,
            Err(NoteError::NotFound("note-404".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_clear_filters_comes_from_listing_handle() {
        let mut mock = MockListing::<Note>::new();
        mock.expect_filter(Ok(()));

        let client = NoteClient::new(mock.client());
        client.clear_filters().await.unwrap();
        assert_eq!(mock.changes(), vec![FilterChange::Clear]);
    }
}
