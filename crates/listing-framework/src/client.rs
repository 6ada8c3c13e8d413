//! # Listing Client
//!
//! This module defines the generic client for communicating with a listing.

use crate::entity::Listable;
use crate::error::FrameworkError;
use crate::filter::{CategorySelector, SortOrder};
use crate::message::{FilterChange, ListingRequest};
use crate::view::ListingView;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ListingActor`.
///
/// Holds only a sender, so cloning is cheap. Each method is one request/reply round trip;
/// filter edits return as soon as the listing has recorded them, not when the debounced
/// reset has run.
pub struct ListingClient<T: Listable> {
    sender: mpsc::Sender<ListingRequest<T>>,
}

impl<T: Listable> Clone for ListingClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Listable> ListingClient<T> {
    pub fn new(sender: mpsc::Sender<ListingRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn set_query(&self, query: String) -> Result<(), FrameworkError> {
        self.filter(FilterChange::Query(query)).await
    }

    pub async fn set_category(&self, category: CategorySelector) -> Result<(), FrameworkError> {
        self.filter(FilterChange::Category(category)).await
    }

    pub async fn set_sort_order(&self, order: SortOrder) -> Result<(), FrameworkError> {
        self.filter(FilterChange::Sort(order)).await
    }

    pub async fn clear_filters(&self) -> Result<(), FrameworkError> {
        self.filter(FilterChange::Clear).await
    }

    pub async fn filter(&self, change: FilterChange) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ListingRequest::Filter { change, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Requests the next page. `Ok(false)` means the busy/exhausted guard turned it down.
    pub async fn load_more(&self) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ListingRequest::LoadMore { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn view(&self) -> Result<ListingView<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ListingRequest::View { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: String) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ListingRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Like [`get`](Self::get), but a missing id is [`FrameworkError::NotFound`].
    pub async fn require(&self, id: String) -> Result<T, FrameworkError> {
        self.get(id.clone())
            .await?
            .ok_or(FrameworkError::NotFound(id))
    }
}
