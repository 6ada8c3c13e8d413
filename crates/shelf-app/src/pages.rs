//! # Listing Pages
//!
//! Turns a [`ListingView`] into what the Books and Notes pages show: a header, the subject
//! picker, a stats badge and either the card grid or the empty state.
//!
//! ```text
//! ListingView ──ListingPage::from_view──▶ header + picker + "{total} Books"
//!                                        └─ PageBody::Grid { cards, footer }
//!                                        └─ PageBody::Empty { message, "Clear Filters" }
//! ```
//!
//! The footer mirrors the infinite-scroll region: it exists only while more items remain, and
//! shows a spinner label while a page is being fetched.

use crate::model::{Book, Note};
use crate::navigation::Route;
use listing_framework::{FilterCriteria, Listable, ListingView};
use std::marker::PhantomData;

/// How a record kind presents itself on its listing page.
pub trait Presentable: Listable {
    /// Plural noun for headings and the stats badge, e.g. `Books`.
    const PLURAL: &'static str;
    /// Heading shown above the controls.
    const HEADING: &'static str;

    fn card(&self) -> Card;
}

/// One tile of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: f32,
    pub downloads: u32,
    pub image_url: String,
    /// Document format for notes.
    pub badge: Option<String>,
    /// Detail screen opened by clicking the card.
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Footer {
    /// A page is on its way, e.g. "Loading more books...".
    LoadingMore(String),
    /// The observed region that requests the next page.
    Sentinel,
    /// Everything is shown; no sentinel is rendered.
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Grid { cards: Vec<Card>, footer: Footer },
    Empty { message: String, action: String },
}

/// A fully laid-out listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<T> {
    pub heading: &'static str,
    /// Picker options, `All` first.
    pub subjects: Vec<String>,
    pub criteria: FilterCriteria,
    pub stats: String,
    pub body: PageBody,
    kind: PhantomData<T>,
}

pub type BooksPage = ListingPage<Book>;
pub type NotesPage = ListingPage<Note>;

pub const CLEAR_FILTERS: &str = "Clear Filters";

impl<T: Presentable> ListingPage<T> {
    pub fn from_view(view: &ListingView<T>) -> Self {
        let noun = T::PLURAL.to_lowercase();

        let body = if view.show_empty_state() {
            PageBody::Empty {
                message: format!("No {noun} found matching your criteria."),
                action: CLEAR_FILTERS.to_string(),
            }
        } else {
            let footer = match (view.has_more, view.loading) {
                (true, true) => Footer::LoadingMore(format!("Loading more {noun}...")),
                (true, false) => Footer::Sentinel,
                (false, _) => Footer::End,
            };
            PageBody::Grid {
                cards: view.items.iter().map(T::card).collect(),
                footer,
            }
        };

        let subjects = std::iter::once("All".to_string())
            .chain(view.categories.iter().cloned())
            .collect();

        Self {
            heading: T::HEADING,
            subjects,
            criteria: view.criteria.clone(),
            stats: format!("{} {}", view.total, T::PLURAL),
            body,
            kind: PhantomData,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match &self.body {
            PageBody::Grid { cards, .. } => cards,
            PageBody::Empty { .. } => &[],
        }
    }
}

impl Presentable for Book {
    const PLURAL: &'static str = "Books";
    const HEADING: &'static str = "Full Library.";

    fn card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.to_string(),
            rating: self.rating,
            downloads: self.downloads,
            image_url: self.image_url.clone(),
            badge: None,
            route: Route::Book(self.id.clone()),
        }
    }
}

impl Presentable for Note {
    const PLURAL: &'static str = "Notes";
    const HEADING: &'static str = "Study Notes.";

    fn card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.to_string(),
            rating: self.rating,
            downloads: self.downloads,
            image_url: self.image_url.clone(),
            badge: Some(self.document_type.to_string()),
            route: Route::Note(self.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentType, Subject};
    use listing_framework::Phase;

    fn view<T>(items: Vec<T>, total: usize, loading: bool, has_more: bool) -> ListingView<T> {
        ListingView {
            items,
            total,
            loading,
            has_more,
            phase: Phase::Idle,
            criteria: FilterCriteria::default(),
            categories: vec!["Computer Science".into(), "Mathematics".into()],
        }
    }

    fn books(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book::new(i, format!("Title {i}"), "Author", Subject::Physics))
            .collect()
    }

    #[test]
    fn test_grid_with_sentinel_while_more_remain() {
        let page = BooksPage::from_view(&view(books(10), 42, false, true));

        assert_eq!(page.stats, "42 Books");
        assert_eq!(page.heading, "Full Library.");
        assert_eq!(page.subjects, vec!["All", "Computer Science", "Mathematics"]);
        match &page.body {
            PageBody::Grid { cards, footer } => {
                assert_eq!(cards.len(), 10);
                assert_eq!(cards[3].route, Route::Book("book-3".into()));
                assert_eq!(*footer, Footer::Sentinel);
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_footer_names_the_kind() {
        let page = BooksPage::from_view(&view(books(10), 20, true, true));
        match page.body {
            PageBody::Grid { footer, .. } => {
                assert_eq!(footer, Footer::LoadingMore("Loading more books...".into()))
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn test_exhausted_listing_has_no_sentinel() {
        let page = BooksPage::from_view(&view(books(4), 4, false, false));
        assert!(matches!(page.body, PageBody::Grid { footer: Footer::End, .. }));
        assert_eq!(page.cards().len(), 4);
    }

    #[test]
    fn test_empty_state_offers_clear_filters() {
        let page = NotesPage::from_view(&view(Vec::new(), 0, false, false));
        assert_eq!(page.stats, "0 Notes");
        assert_eq!(
            page.body,
            PageBody::Empty {
                message: "No notes found matching your criteria.".into(),
                action: CLEAR_FILTERS.into(),
            }
        );
        assert!(page.cards().is_empty());
    }

    #[test]
    fn test_pending_reset_is_not_the_empty_state() {
        let page = NotesPage::from_view(&view(Vec::new(), 15, true, false));
        assert!(matches!(page.body, PageBody::Grid { .. }));
    }

    #[test]
    fn test_note_cards_carry_document_type() {
        let note = Note::new(2, "Calculus", "Student 2", Subject::Mathematics, DocumentType::Docx);
        let card = note.card();
        assert_eq!(card.badge.as_deref(), Some("DOCX"));
        assert_eq!(card.route.to_string(), "/notes/note-2");
        assert_eq!(card.category, "Mathematics");
    }
}
