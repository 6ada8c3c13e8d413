//! [`Listable`] implementation for the [`Book`] domain type.

use crate::model::Book;
use listing_framework::Listable;

impl Listable for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn category(&self) -> &str {
        self.category.name()
    }
}
