use super::Subject;
use serde::{Deserialize, Serialize};

/// A book in the shared library.
///
/// # Listing Framework
/// This struct implements the [`Listable`](listing_framework::Listable) trait, allowing it to
/// be browsed by a [`ListingActor`](listing_framework::ListingActor).
/// See [`crate::book_listing`] for the implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// `book-<index>`
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: Subject,
    /// 3.0 to 5.0, one decimal place.
    pub rating: f32,
    pub downloads: u32,
    pub image_url: String,
}

impl Book {
    /// Creates a Book with neutral statistics.
    ///
    /// # Arguments
    /// * `index` - Position in the collection; becomes the `book-<index>` id
    /// * `title` - Display title
    /// * `author` - Display author
    /// * `category` - Subject the book is filed under
    pub fn new(
        index: usize,
        title: impl Into<String>,
        author: impl Into<String>,
        category: Subject,
    ) -> Self {
        Self {
            id: format!("book-{index}"),
            title: title.into(),
            author: author.into(),
            category,
            rating: 3.0,
            downloads: 100,
            image_url: String::new(),
        }
    }
}
