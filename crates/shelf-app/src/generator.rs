//! # Synthetic Collections
//!
//! The catalogue has no backing store: each listing mount generates its own collection.
//! Titles and subjects cycle by index, the volume/part suffix is `index / 10 + 1`, and the id
//! is `<kind>-<index>`. Rating and downloads are drawn from `rng` on every call, so two calls
//! never agree on them; tests should only rely on the derived fields.

use crate::model::{Book, Note, GENERATED_DOCUMENT_TYPES, LISTING_SUBJECTS};
use rand::Rng;

const BOOK_TITLES: [&str; 10] = [
    "Introduction to Algorithms",
    "Clean Code",
    "The Pragmatic Programmer",
    "Structure and Interpretation",
    "Design Patterns",
    "Artificial Intelligence",
    "Calculus Early Transcendentals",
    "University Physics",
    "The Republic",
    "Critique of Pure Reason",
];

const NOTE_TITLES: [&str; 10] = [
    "Data Structures - Week 5 Trees",
    "Thermodynamics Formulas",
    "Calculus II Final Review",
    "Linear Algebra Cheat Sheet",
    "Operating Systems Notes",
    "Database Management Summary",
    "Quantum Mechanics Lecture 3",
    "World War II Timeline",
    "Shakespeare Analysis",
    "Cognitive Psychology Notes",
];

/// Uniform in [3.0, 5.0], rounded to one decimal place.
fn rating<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let raw: f32 = rng.gen_range(3.0..=5.0);
    (raw * 10.0).round() / 10.0
}

/// Uniform in [100, 5100).
fn downloads<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(100..5100)
}

pub fn generate_books<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Book> {
    (0..count)
        .map(|i| Book {
            id: format!("book-{i}"),
            title: format!("{} - Vol {}", BOOK_TITLES[i % BOOK_TITLES.len()], i / 10 + 1),
            author: format!("Author Name {i}"),
            category: LISTING_SUBJECTS[i % LISTING_SUBJECTS.len()],
            rating: rating(rng),
            downloads: downloads(rng),
            image_url: format!("https://source.unsplash.com/random/300x400?book,sig={i}"),
        })
        .collect()
}

pub fn generate_notes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Note> {
    (0..count)
        .map(|i| Note {
            id: format!("note-{i}"),
            title: format!("{} - Part {}", NOTE_TITLES[i % NOTE_TITLES.len()], i / 10 + 1),
            author: format!("Student {i}"),
            category: LISTING_SUBJECTS[i % LISTING_SUBJECTS.len()],
            rating: rating(rng),
            downloads: downloads(rng),
            image_url: format!("https://source.unsplash.com/random/300x400?notes,study,sig={i}"),
            document_type: GENERATED_DOCUMENT_TYPES[i % GENERATED_DOCUMENT_TYPES.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentType, Subject};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_books_derive_fields_from_index() {
        let books = generate_books(100, &mut StdRng::seed_from_u64(1));
        assert_eq!(books.len(), 100);

        assert_eq!(books[0].id, "book-0");
        assert_eq!(books[0].title, "Introduction to Algorithms - Vol 1");
        assert_eq!(books[0].author, "Author Name 0");
        assert_eq!(books[0].category, Subject::ComputerScience);

        assert_eq!(books[22].title, "The Pragmatic Programmer - Vol 3");
        assert_eq!(books[8].category, Subject::Mathematics);
        assert_eq!(books[99].title, "Critique of Pure Reason - Vol 10");
        assert!(books[7].image_url.ends_with("sig=7"));
    }

    #[test]
    fn test_ids_are_unique() {
        let notes = generate_notes(100, &mut StdRng::seed_from_u64(2));
        let ids: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_notes_cycle_document_types() {
        let notes = generate_notes(12, &mut StdRng::seed_from_u64(3));
        assert_eq!(notes[0].document_type, DocumentType::Pdf);
        assert_eq!(notes[4].document_type, DocumentType::Txt);
        assert_eq!(notes[5].document_type, DocumentType::Pdf);
        assert_eq!(notes[11].title, "Thermodynamics Formulas - Part 2");
        assert_eq!(notes[11].author, "Student 11");
    }

    #[test]
    fn test_random_statistics_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for book in generate_books(500, &mut rng) {
            assert!((3.0..=5.0).contains(&book.rating), "rating {}", book.rating);
            assert!((100..5100).contains(&book.downloads));
            assert_eq!((book.rating * 10.0).round() / 10.0, book.rating);
        }
    }
}
