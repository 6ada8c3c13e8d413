use super::{DocumentType, Subject};
use serde::{Deserialize, Serialize};

/// Study notes shared by a student.
///
/// Same shape as [`Book`](super::Book) plus the document format. See
/// [`crate::note_listing`] for the [`Listable`](listing_framework::Listable) implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// `note-<index>`
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: Subject,
    pub rating: f32,
    pub downloads: u32,
    pub image_url: String,
    pub document_type: DocumentType,
}

impl Note {
    pub fn new(
        index: usize,
        title: impl Into<String>,
        author: impl Into<String>,
        category: Subject,
        document_type: DocumentType,
    ) -> Self {
        Self {
            id: format!("note-{index}"),
            title: title.into(),
            author: author.into(),
            category,
            rating: 3.0,
            downloads: 100,
            image_url: String::new(),
            document_type,
        }
    }
}
