//! Book model and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::library::Library;

/// Book record (scalar fields only)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    #[serde(rename = "naziv")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
}

/// Book with its library pairings, as served by the books endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetails {
    pub id: i32,
    #[serde(rename = "naziv")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "knjiznicaKnjige")]
    pub pairings: Vec<BookPairing>,
}

/// A pairing seen from the book side.
///
/// Embeds only the library; the back-reference toward the book is cut to
/// keep the serialized graph acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookPairing {
    pub id: i32,
    #[serde(rename = "knjiznicaId")]
    pub library_id: i32,
    #[serde(rename = "knjigaId")]
    pub book_id: i32,
    #[serde(rename = "knjiznica")]
    pub library: Option<Library>,
}

/// Request body for POST and PUT on `/api/knjige`.
///
/// Missing fields deserialize to their defaults; the validation layer is
/// what rejects an empty title or author. PascalCase aliases mirror the
/// case-insensitive property matching of the original backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveBookRequest {
    #[serde(rename = "naziv", alias = "Naziv", default)]
    pub title: String,
    #[serde(rename = "autor", alias = "Autor", default)]
    pub author: String,
    #[serde(alias = "ISBN", alias = "Isbn", default)]
    pub isbn: String,
    #[serde(rename = "knjizniceIds", alias = "KnjizniceIds", default)]
    pub library_ids: Option<Vec<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: SaveBookRequest = serde_json::from_str(
            r#"{"naziv":"Dune","autor":"Herbert","isbn":"123","knjizniceIds":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "Herbert");
        assert_eq!(req.isbn, "123");
        assert_eq!(req.library_ids, Some(vec![1, 2]));
    }

    #[test]
    fn test_request_deserializes_pascal_case() {
        let req: SaveBookRequest = serde_json::from_str(
            r#"{"Naziv":"Dune","Autor":"Herbert","ISBN":"123","KnjizniceIds":[2]}"#,
        )
        .unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "Herbert");
        assert_eq!(req.isbn, "123");
        assert_eq!(req.library_ids, Some(vec![2]));
    }

    #[test]
    fn test_request_missing_fields_default() {
        let req: SaveBookRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title, "");
        assert_eq!(req.author, "");
        assert_eq!(req.isbn, "");
        assert_eq!(req.library_ids, None);
    }

    #[test]
    fn test_book_details_wire_shape() {
        let book = BookDetails {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            pairings: vec![BookPairing {
                id: 10,
                library_id: 2,
                book_id: 1,
                library: Some(Library {
                    id: 2,
                    name: "Gradska knjižnica".to_string(),
                }),
            }],
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "naziv": "Dune",
                "autor": "Herbert",
                "isbn": "123",
                "knjiznicaKnjige": [{
                    "id": 10,
                    "knjiznicaId": 2,
                    "knjigaId": 1,
                    "knjiznica": {"id": 2, "naziv": "Gradska knjižnica"}
                }]
            })
        );
    }
}
