//! Data models and wire DTOs
//!
//! Rust identifiers are English; the JSON property names keep the Croatian
//! spellings the existing frontends send and expect (`naziv`, `autor`,
//! `knjiznicaKnjige`, ...).

pub mod book;
pub mod library;

pub use book::{Book, BookDetails, BookPairing, SaveBookRequest};
pub use library::{Library, LibraryDetails, LibraryPairing};
