//! Plain records shown by the listings and the upload form's enumerations.

pub mod book;
pub mod note;
pub mod subject;

pub use book::*;
pub use note::*;
pub use subject::*;
