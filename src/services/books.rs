//! Books service

use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDetails, SaveBookRequest},
    repository::Repository,
};

/// Reject a save request whose title or author is empty or whitespace.
/// Runs before any write, so an invalid request never touches the store.
fn validate(data: &SaveBookRequest) -> AppResult<()> {
    if data.title.trim().is_empty() {
        return Err(AppError::Validation("Naziv je obavezan.".to_string()));
    }
    if data.author.trim().is_empty() {
        return Err(AppError::Validation("Autor je obavezan.".to_string()));
    }
    Ok(())
}

/// Drop repeated library ids, keeping first occurrences in order.
/// A repeated id would otherwise trip the unique pairing index.
fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books with their library pairings
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        self.repository.books.list().await
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookDetails> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book paired to the requested libraries
    pub async fn create(&self, data: &SaveBookRequest) -> AppResult<BookDetails> {
        validate(data)?;
        let library_ids = dedup_ids(data.library_ids.as_deref().unwrap_or_default());
        self.repository
            .books
            .create(&data.title, &data.author, &data.isbn, &library_ids)
            .await
    }

    /// Update a book, replacing its pairing set with the requested one
    pub async fn update(&self, id: i32, data: &SaveBookRequest) -> AppResult<BookDetails> {
        validate(data)?;
        let library_ids = dedup_ids(data.library_ids.as_deref().unwrap_or_default());
        self.repository
            .books
            .update(id, &data.title, &data.author, &data.isbn, &library_ids)
            .await
    }

    /// Delete a book and all its pairings
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, author: &str) -> SaveBookRequest {
        SaveBookRequest {
            title: title.to_string(),
            author: author.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_filled_fields() {
        assert!(validate(&request("Dune", "Herbert")).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = validate(&request("", "Herbert")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Naziv je obavezan."));
    }

    #[test]
    fn test_validate_rejects_whitespace_title() {
        let err = validate(&request("   ", "Herbert")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_empty_author() {
        let err = validate(&request("Dune", " ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Autor je obavezan."));
    }

    #[test]
    fn test_dedup_preserves_order() {
        assert_eq!(dedup_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_ids(&[]).is_empty());
    }
}
