//! # ListingHandle Trait
//!
//! Provides a common interface for kind-specific listing clients, adding default `view`,
//! `load_more` and `clear_filters` methods built on top of a generic `ListingClient`.
use crate::{FrameworkError, Listable, ListingClient, ListingView};
use async_trait::async_trait;

/// Trait for kind-specific clients (e.g. `BookClient`) to inherit the shared listing calls.
///
/// # Example
///
/// ```rust
/// use listing_framework::{FrameworkError, Listable, ListingClient, ListingHandle};
///
/// #[derive(Clone, Debug)]
/// struct Paper { id: String }
///
/// impl Listable for Paper {
///     const KIND: &'static str = "paper";
///     fn id(&self) -> &str { &self.id }
///     fn title(&self) -> &str { &self.id }
///     fn author(&self) -> &str { "" }
///     fn category(&self) -> &str { "" }
/// }
///
/// #[derive(Debug)]
/// struct PaperError(String);
///
/// impl From<String> for PaperError {
///     fn from(s: String) -> Self { PaperError(s) }
/// }
///
/// struct PaperClient { inner: ListingClient<Paper> }
///
/// impl ListingHandle<Paper> for PaperClient {
///     type Error = PaperError;
///     fn inner(&self) -> &ListingClient<Paper> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { PaperError(e.to_string()) }
/// }
///
/// async fn usage(client: PaperClient) {
///     // view(), load_more() and clear_filters() are provided automatically.
///     let _ = client.view().await;
///     let _ = client.load_more().await;
/// }
/// ```
#[async_trait]
pub trait ListingHandle<T: Listable>: Send + Sync {
    /// The kind-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ListingClient.
    fn inner(&self) -> &ListingClient<T>;

    /// Map framework errors to the kind-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Snapshot of what the page should render.
    #[tracing::instrument(skip(self))]
    async fn view(&self) -> Result<ListingView<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().view().await.map_err(Self::map_error)
    }

    /// Ask for the next page. `Ok(false)` when the guard rejected it.
    #[tracing::instrument(skip(self))]
    async fn load_more(&self) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load_more().await.map_err(Self::map_error)
    }

    /// The empty state's one-click reset.
    #[tracing::instrument(skip(self))]
    async fn clear_filters(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear_filters().await.map_err(Self::map_error)
    }
}
