//! # Upload
//!
//! The upload screen: a form for sharing a book or a set of notes, synchronous validation and
//! a simulated processing step followed by a success banner and a redirect.
//!
//! ## Structure
//!
//! - [`form`] - [`UploadForm`], [`FormEdit`] and validation into a [`Submission`]
//! - [`desk`] - the [`UploadDesk`] actor that owns the form and its phases
//! - [`error`] - [`UploadError`]
//! - [`new()`] - Factory function that creates the desk and its client
//!
//! ## Usage
//!
//! ```rust
//! use shelf_app::config::UploadConfig;
//! use shelf_app::model::Subject;
//! use shelf_app::navigation::MemoryNavigator;
//! use shelf_app::upload::{self, FileHandle, FormEdit};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (desk, client) = upload::new(UploadConfig::default());
//!     tokio::spawn(desk.run(Arc::new(MemoryNavigator::new())));
//!
//!     client.edit(FormEdit::Title("Clean Code".into())).await?;
//!     client.edit(FormEdit::Author("Robert Martin".into())).await?;
//!     client.edit(FormEdit::Category(Some(Subject::ComputerScience))).await?;
//!     client.edit(FormEdit::File(Some(FileHandle::new("clean-code.pdf", 4096)))).await?;
//!
//!     let submission = client.submit().await?;
//!     assert_eq!(submission.title, "Clean Code");
//!     Ok(())
//! }
//! ```

pub mod desk;
pub mod error;
pub mod form;

pub use desk::*;
pub use error::*;
pub use form::*;

use crate::clients::UploadClient;
use crate::config::UploadConfig;

/// Creates a new upload desk and its client.
pub fn new(config: UploadConfig) -> (UploadDesk, UploadClient) {
    UploadDesk::new(config)
}
