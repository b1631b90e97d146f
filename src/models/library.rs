//! Library model and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::book::Book;

/// Library record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i32,
    #[serde(rename = "naziv")]
    pub name: String,
}

/// Library with its book pairings, as served by the libraries endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LibraryDetails {
    pub id: i32,
    #[serde(rename = "naziv")]
    pub name: String,
    #[serde(rename = "knjiznicaKnjige")]
    pub pairings: Vec<LibraryPairing>,
}

/// A pairing seen from the library side.
///
/// Embeds only the book, plus the copy count kept on the pairing row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LibraryPairing {
    pub id: i32,
    #[serde(rename = "knjiznicaId")]
    pub library_id: i32,
    #[serde(rename = "knjigaId")]
    pub book_id: i32,
    #[serde(rename = "brojPrimjeraka")]
    pub copy_count: i32,
    #[serde(rename = "knjiga")]
    pub book: Option<Book>,
}
