use crate::clients::{BookClient, NoteClient, UploadClient};
use crate::config::ShelfConfig;
use crate::generator::{generate_books, generate_notes};
use crate::model::{Book, Note};
use crate::navigation::Navigator;
use listing_framework::VisibilityObserver;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The running shelf: both listings and the upload desk.
///
/// # Example
///
/// ```ignore
/// let system = ShelfSystem::new(&config, observer, navigator);
///
/// system.book_client.filter_by_subject("Mathematics").await?;
/// let view = system.book_client.view().await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShelfSystem {
    pub book_client: BookClient,
    pub note_client: NoteClient,
    pub upload_client: UploadClient,

    /// Task handles for every running actor (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ShelfSystem {
    /// Mounts both listings over freshly generated collections.
    pub fn new(
        config: &ShelfConfig,
        observer: Arc<dyn VisibilityObserver>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut rng = rand::thread_rng();
        let books = generate_books(config.collection_size, &mut rng);
        let notes = generate_notes(config.collection_size, &mut rng);
        Self::with_collections(config, books, notes, observer, navigator)
    }

    /// Mounts both listings over the given collections.
    pub fn with_collections(
        config: &ShelfConfig,
        books: Vec<Book>,
        notes: Vec<Note>,
        observer: Arc<dyn VisibilityObserver>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        // 1. Create actors (no capabilities yet)
        let (book_actor, book_client) = crate::book_listing::new(books, config.listing.clone());
        let (note_actor, note_client) = crate::note_listing::new(notes, config.listing.clone());
        let (desk, upload_client) = crate::upload::new(config.upload.clone());

        // 2. Start actors with injected capabilities
        let handles = vec![
            tokio::spawn(book_actor.run(observer.clone())),
            tokio::spawn(note_actor.run(observer)),
            tokio::spawn(desk.run(navigator)),
        ];

        Self {
            book_client,
            note_client,
            upload_client,
            handles,
        }
    }

    /// Drops every client, then waits for each actor to tear down.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down shelf...");

        drop(self.book_client);
        drop(self.note_client);
        drop(self.upload_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Shelf shutdown complete.");
        Ok(())
    }
}
