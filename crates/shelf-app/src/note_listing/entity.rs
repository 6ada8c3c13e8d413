//! [`Listable`] implementation for the [`Note`] domain type.

use crate::model::Note;
use listing_framework::Listable;

impl Listable for Note {
    const KIND: &'static str = "note";
    const SORTABLE: bool = false;

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
