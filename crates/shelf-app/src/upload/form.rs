//! # Upload Form
//!
//! The form model behind the upload screen, the edits it accepts and the validation that turns
//! a filled form into a [`Submission`].

use super::error::UploadError;
use crate::model::{DocumentType, Subject};
use crate::navigation::Route;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which shelf the upload lands on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Book,
    Note,
}

impl ResourceKind {
    /// The listing the visitor is sent to once the upload succeeds.
    pub fn listing_route(&self) -> Route {
        match self {
            ResourceKind::Book => Route::Books,
            ResourceKind::Note => Route::Notes,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Book => f.write_str("book"),
            ResourceKind::Note => f.write_str("note"),
        }
    }
}

/// A file picked by the visitor. Only its metadata travels; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// Raw form state. Numeric fields stay as typed text until validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadForm {
    pub kind: ResourceKind,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: Option<Subject>,
    pub language: String,
    pub year: String,
    pub pages: String,
    pub file: Option<FileHandle>,
    pub cover_image: Option<FileHandle>,
    /// Only sent for notes.
    pub document_type: DocumentType,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            kind: ResourceKind::default(),
            title: String::new(),
            author: String::new(),
            description: String::new(),
            category: None,
            language: "English".to_string(),
            year: chrono::Local::now().year().to_string(),
            pages: String::new(),
            file: None,
            cover_image: None,
            document_type: DocumentType::default(),
        }
    }
}

/// One input change on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Kind(ResourceKind),
    Title(String),
    Author(String),
    Description(String),
    Category(Option<Subject>),
    Language(String),
    Year(String),
    Pages(String),
    File(Option<FileHandle>),
    CoverImage(Option<FileHandle>),
    DocumentType(DocumentType),
}

/// A validated upload, ready to hand to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub kind: ResourceKind,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: Subject,
    pub language: String,
    pub year: Option<u32>,
    pub pages: Option<u32>,
    pub file: FileHandle,
    pub cover_image: Option<FileHandle>,
    pub document_type: Option<DocumentType>,
}

impl UploadForm {
    /// A blank form that keeps the selected kind.
    pub fn reset(&self) -> Self {
        Self {
            kind: self.kind,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Kind(kind) => self.kind = kind,
            FormEdit::Title(title) => self.title = title,
            FormEdit::Author(author) => self.author = author,
            FormEdit::Description(description) => self.description = description,
            FormEdit::Category(category) => self.category = category,
            FormEdit::Language(language) => self.language = language,
            FormEdit::Year(year) => self.year = year,
            FormEdit::Pages(pages) => self.pages = pages,
            FormEdit::File(file) => self.file = file,
            FormEdit::CoverImage(cover) => self.cover_image = cover,
            FormEdit::DocumentType(document_type) => self.document_type = document_type,
        }
    }

    /// Checks required fields, then numeric fields, in form order.
    pub fn validate(&self) -> Result<Submission, UploadError> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;
        let category = self.category.ok_or(UploadError::MissingField("category"))?;
        let file = self.file.clone().ok_or(UploadError::MissingField("file"))?;
        let year = positive("year", &self.year)?;
        let pages = positive("pages", &self.pages)?;

        Ok(Submission {
            kind: self.kind,
            title,
            author,
            description: self.description.trim().to_string(),
            category,
            language: self.language.trim().to_string(),
            year,
            pages,
            file,
            cover_image: self.cover_image.clone(),
            document_type: match self.kind {
                ResourceKind::Note => Some(self.document_type),
                ResourceKind::Book => None,
            },
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, UploadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UploadError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Empty means "not given"; anything else must parse to a number above zero.
fn positive(field: &'static str, value: &str) -> Result<Option<u32>, UploadError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(UploadError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}
