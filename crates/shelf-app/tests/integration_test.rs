use listing_framework::mock::MockObserver;
use listing_framework::{ListingHandle, Phase, Region, SortOrder};
use shelf_app::config::ShelfConfig;
use shelf_app::lifecycle::ShelfSystem;
use shelf_app::model::{Book, DocumentType, Note, Subject, LISTING_SUBJECTS};
use shelf_app::navigation::{MemoryNavigator, Route};
use shelf_app::note_listing::NoteError;
use shelf_app::pages::{BooksPage, Footer, NotesPage, PageBody};
use std::sync::Arc;
use std::time::Duration;

/// Fixed records: zero-padded titles so title order matches index order.
fn books(count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| {
            Book::new(
                i,
                format!("Book {i:03}"),
                format!("Author Name {i}"),
                LISTING_SUBJECTS[i % LISTING_SUBJECTS.len()],
            )
        })
        .collect()
}

fn notes(count: usize) -> Vec<Note> {
    (0..count)
        .map(|i| {
            Note::new(
                i,
                format!("Note {i:03}"),
                format!("Student {i}"),
                LISTING_SUBJECTS[i % LISTING_SUBJECTS.len()],
                DocumentType::Pdf,
            )
        })
        .collect()
}

fn start(book_count: usize, note_count: usize) -> (ShelfSystem, Arc<MockObserver>) {
    let observer = Arc::new(MockObserver::new());
    let system = ShelfSystem::with_collections(
        &ShelfConfig::default(),
        books(book_count),
        notes(note_count),
        observer.clone(),
        Arc::new(MemoryNavigator::new()),
    );
    (system, observer)
}

async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Full end-to-end test with every real actor running.
#[tokio::test(start_paused = true)]
async fn test_books_page_browse_filter_and_scroll() {
    let (system, observer) = start(100, 20);
    settle(600).await;

    let page = BooksPage::from_view(&system.book_client.view().await.unwrap());
    assert_eq!(page.stats, "100 Books");
    assert_eq!(page.cards().len(), 10);
    assert_eq!(page.subjects.len(), 1 + LISTING_SUBJECTS.len());
    assert!(matches!(page.body, PageBody::Grid { footer: Footer::Sentinel, .. }));

    system
        .book_client
        .filter_by_subject("Mathematics")
        .await
        .expect("Failed to filter");
    settle(600).await;

    let page = BooksPage::from_view(&system.book_client.view().await.unwrap());
    assert_eq!(page.stats, "15 Books");
    assert_eq!(page.cards().len(), 10);
    assert!(page.cards().iter().all(|c| c.category == "Mathematics"));

    assert!(observer.scroll_into_view(&Region::new("books-sentinel")));
    let view = system.book_client.view().await.unwrap();
    assert_eq!(view.phase, Phase::LoadingMore);
    let page = BooksPage::from_view(&view);
    assert!(matches!(
        page.body,
        PageBody::Grid { footer: Footer::LoadingMore(ref label), .. } if label == "Loading more books..."
    ));

    settle(900).await;
    let page = BooksPage::from_view(&system.book_client.view().await.unwrap());
    assert_eq!(page.cards().len(), 15);
    assert!(matches!(page.body, PageBody::Grid { footer: Footer::End, .. }));
    assert!(!observer.is_observing(&Region::new("books-sentinel")));

    let card = &page.cards()[0];
    assert_eq!(card.route, Route::Book(card.id.clone()));
    let book = system.book_client.book(&card.id).await.expect("Book not found");
    assert_eq!(book.category, Subject::Mathematics);

    system.shutdown().await.expect("Shutdown failed");
    assert_eq!(observer.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_books_sort_descending() {
    let (system, _observer) = start(12, 1);
    settle(600).await;

    system.book_client.sort_by_title(SortOrder::Desc).await.unwrap();
    settle(600).await;

    let view = system.book_client.view().await.unwrap();
    assert_eq!(view.items[0].title, "Book 011");
    assert_eq!(view.criteria.sort, SortOrder::Desc);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_notes_empty_state_and_clear_filters() {
    let (system, _observer) = start(10, 30);
    settle(600).await;

    system.note_client.search("Quantum").await.unwrap();
    settle(600).await;

    let page = NotesPage::from_view(&system.note_client.view().await.unwrap());
    assert_eq!(page.stats, "0 Notes");
    assert_eq!(
        page.body,
        PageBody::Empty {
            message: "No notes found matching your criteria.".into(),
            action: "Clear Filters".into(),
        }
    );

    system.note_client.clear_filters().await.unwrap();
    settle(600).await;
    let view = system.note_client.view().await.unwrap();
    assert_eq!(view.criteria.query, "");
    assert_eq!(view.items.len(), 10);
    assert!(view.has_more);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_notes_reject_sorting() {
    let (system, _observer) = start(1, 12);
    settle(600).await;

    let result = system.note_client.sort_by_title(SortOrder::Desc).await;
    assert_eq!(result, Err(NoteError::SortUnsupported));

    let view = system.note_client.view().await.unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.items[0].title, "Note 000");

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_note_lookup_by_id() {
    let (system, _observer) = start(1, 5);

    let note = system.note_client.note("note-4").await.unwrap();
    assert_eq!(note.title, "Note 004");
    assert_eq!(
        system.note_client.note("note-40").await,
        Err(NoteError::NotFound("note-40".into()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_generated_collections_follow_config() {
    let config = ShelfConfig {
        collection_size: 30,
        ..ShelfConfig::default()
    };
    let observer = Arc::new(MockObserver::new());
    let system = ShelfSystem::new(&config, observer.clone(), Arc::new(MemoryNavigator::new()));
    settle(600).await;

    let books = system.book_client.view().await.unwrap();
    let notes = system.note_client.view().await.unwrap();
    assert_eq!(books.total, 30);
    assert_eq!(notes.total, 30);
    assert_eq!(observer.active(), 2);

    system.shutdown().await.unwrap();
    assert_eq!(observer.active(), 0);
}
