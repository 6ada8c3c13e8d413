//! # Filter/Sort Engine
//!
//! A pure function from `(collection, criteria)` to a freshly allocated, filtered and
//! sorted sequence. The source collection is never touched.
//!
//! A record is kept iff its title **or** author contains the query (case-insensitive)
//! and the category selector is [`CategorySelector::All`] or names the record's category.
//! The survivors are ordered by title with [`collate`]; ties keep their collection order.

use crate::entity::Listable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Title ordering requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Category restriction. `All` is the "no restriction" selector shown first in the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        if value == "All" {
            CategorySelector::All
        } else {
            CategorySelector::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("All"),
            CategorySelector::Only(category) => f.write_str(category),
        }
    }
}

/// The filter state owned by a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategorySelector,
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Query and category back to their defaults. Sort order is left as is.
    pub fn cleared(&self) -> Self {
        Self {
            query: String::new(),
            category: CategorySelector::All,
            sort: self.sort,
        }
    }

    /// Returns `true` if `item` passes the search and category tests.
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = item.title().to_lowercase().contains(&needle)
            || item.author().to_lowercase().contains(&needle);
        matches_search && self.category.matches(item.category())
    }
}

/// Locale-style string comparison for titles.
///
/// Primary key is the case-folded text, where each character ranks by class first
/// (whitespace, then punctuation and symbols, then digits, then letters) and by code point
/// within its class, so `"A:" < "A1" < "Ab"`. Equal folds fall back to lowercase sorting
/// before uppercase (`"apple" < "Apple"`), then to code point order.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .map(weight)
        .cmp(b.chars().flat_map(char::to_lowercase).map(weight));
    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or(Ordering::Equal)
    })
}

fn weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    };
    (class, c)
}

/// Produces the filtered sequence for `criteria`.
///
/// `sortable = false` forces ascending order regardless of `criteria.sort`.
pub fn apply<T: Listable>(items: &[T], criteria: &FilterCriteria, sortable: bool) -> Vec<T> {
    let mut result: Vec<T> = items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect();

    let order = if sortable { criteria.sort } else { SortOrder::Asc };
    // sort_by is stable; swapping operands keeps ties in collection order for Desc too.
    match order {
        SortOrder::Asc => result.sort_by(|a, b| collate(a.title(), b.title())),
        SortOrder::Desc => result.sort_by(|a, b| collate(b.title(), a.title())),
    }
    result
}

/// Distinct categories of `items` in first-appearance order.
pub fn categories<T: Listable>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|c| c == item.category()) {
            seen.push(item.category().to_string());
        }
    }
    seen
}
