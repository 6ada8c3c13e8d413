//! # Study Shelf
//!
//! The domain side of the shelf: books and notes, the pages that list them, the upload desk
//! and the orchestration that runs them together. Listing behaviour itself lives in
//! [`listing_framework`].

pub mod book_listing;
pub mod clients;
pub mod config;
pub mod generator;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod note_listing;
pub mod pages;
pub mod reader;
pub mod upload;
