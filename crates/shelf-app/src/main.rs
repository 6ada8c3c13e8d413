//! # Study Shelf
//!
//! A walk through the shelf with a simulated viewport:
//!
//! 1. Mount both listings and the upload desk ([`ShelfSystem`]).
//! 2. Scroll the Books page until it runs out, then narrow it to one subject.
//! 3. Search the Notes page down to nothing and clear the filters from the empty state.
//! 4. Submit an upload and follow the redirect.
//!
//! Set `SHELF_CONFIG` to a TOML file to change collection size, page size or delays, and
//! `RUST_LOG=debug` to see every guard decision and timer.

use listing_framework::mock::MockObserver;
use listing_framework::tracing::setup_tracing;
use listing_framework::{ListingHandle, Region};
use shelf_app::config::ShelfConfig;
use shelf_app::lifecycle::ShelfSystem;
use shelf_app::model::Subject;
use shelf_app::navigation::{account_destination, MemoryIdentityStore, MemoryNavigator};
use shelf_app::pages::{BooksPage, Footer, NotesPage, PageBody};
use shelf_app::reader::ReaderPreview;
use shelf_app::upload::{FileHandle, FormEdit, ResourceKind, UploadPhase};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = ShelfConfig::from_env()?;
    info!(collection_size = config.collection_size, "Starting shelf");

    let viewport = Arc::new(MockObserver::new());
    let navigator = Arc::new(MemoryNavigator::new());
    let identity = MemoryIdentityStore::new();
    let system = ShelfSystem::new(&config, viewport.clone(), navigator.clone());

    let settle = config.listing.reset_delay() + Duration::from_millis(50);
    let fetch = config.listing.load_delay() + Duration::from_millis(50);

    // Books: scroll to the end.
    let books_sentinel = Region::new("books-sentinel");
    async {
        tokio::time::sleep(settle).await;
        while viewport.scroll_into_view(&books_sentinel) {
            tokio::time::sleep(fetch).await;
        }
        let page = BooksPage::from_view(&system.book_client.view().await?);
        info!(stats = %page.stats, shown = page.cards().len(), "Scrolled to the end");

        system
            .book_client
            .filter_by_subject(Subject::Mathematics.name())
            .await?;
        tokio::time::sleep(settle).await;
        let page = BooksPage::from_view(&system.book_client.view().await?);
        let more = matches!(page.body, PageBody::Grid { footer: Footer::Sentinel, .. });
        info!(stats = %page.stats, shown = page.cards().len(), more, "Filtered by subject");

        if let Some(card) = page.cards().first() {
            let book = system.book_client.book(&card.id).await?;
            let preview = ReaderPreview::open(book.title.clone(), &identity);
            info!(route = %card.route, readable = preview.readable(), "Opened reader");
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("books"))
    .await?;

    // Notes: search to nothing, then recover from the empty state.
    async {
        tokio::time::sleep(settle).await;
        system.note_client.search("no such topic").await?;
        tokio::time::sleep(settle).await;
        if let PageBody::Empty { message, action } =
            NotesPage::from_view(&system.note_client.view().await?).body
        {
            info!(%message, %action, "Empty state");
            system.note_client.clear_filters().await?;
        }
        tokio::time::sleep(settle).await;
        let page = NotesPage::from_view(&system.note_client.view().await?);
        info!(stats = %page.stats, shown = page.cards().len(), "Filters cleared");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("notes"))
    .await?;

    // Upload a set of notes and follow the redirect.
    async {
        let upload = &system.upload_client;
        upload.edit(FormEdit::Kind(ResourceKind::Note)).await?;
        upload.edit(FormEdit::Title("Graph Theory Summary".into())).await?;
        upload.edit(FormEdit::Author("Student 101".into())).await?;
        upload
            .edit(FormEdit::Category(Some(Subject::Mathematics)))
            .await?;
        upload.edit(FormEdit::Pages("12".into())).await?;

        if let Err(e) = upload.submit().await {
            info!(error = %e, "Form incomplete");
        }
        upload
            .edit(FormEdit::File(Some(FileHandle::new("graphs.pdf", 48_213))))
            .await?;
        upload.submit().await?;

        let total = config.upload.processing_delay() + config.upload.banner_duration();
        tokio::time::sleep(total + Duration::from_millis(50)).await;
        let snapshot = upload.snapshot().await?;
        info!(
            phase = ?snapshot.phase,
            redirected = ?navigator.current().map(|r| r.to_string()),
            "Upload finished"
        );
        debug_assert_eq!(snapshot.phase, UploadPhase::Editing);
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("upload"))
    .await?;

    info!(account = %account_destination(&identity), "Account icon");

    system.shutdown().await?;
    info!(observed = viewport.active(), "Application completed successfully");
    Ok(())
}
