//! Reader preview opened from a detail screen. Anonymous visitors get a sample; the rest of
//! the preview is locked behind the login screen.

use crate::navigation::{IdentityStore, Route, USER_ID_KEY};

pub const PREVIEW_PAGES: u32 = 15;
/// Last page an anonymous visitor may read.
pub const SAMPLE_LIMIT: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPage {
    /// 1-based.
    pub number: u32,
    pub heading: String,
    /// Where the "Login to Unlock" button leads, for locked pages.
    pub unlock: Option<Route>,
}

impl ReaderPage {
    pub fn is_locked(&self) -> bool {
        self.unlock.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPreview {
    pub title: String,
    pub pages: Vec<ReaderPage>,
}

impl ReaderPreview {
    pub fn open(title: impl Into<String>, identity: &dyn IdentityStore) -> Self {
        let signed_in = identity.get(USER_ID_KEY).is_some();
        let pages = (1..=PREVIEW_PAGES)
            .map(|number| ReaderPage {
                number,
                heading: format!("Section {number}"),
                unlock: (!signed_in && number > SAMPLE_LIMIT).then_some(Route::Login),
            })
            .collect();
        Self {
            title: title.into(),
            pages,
        }
    }

    pub fn readable(&self) -> usize {
        self.pages.iter().filter(|p| !p.is_locked()).count()
    }
}
