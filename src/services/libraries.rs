//! Libraries service

use crate::{error::AppResult, models::library::LibraryDetails, repository::Repository};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all libraries ordered by name ascending
    pub async fn list(&self) -> AppResult<Vec<LibraryDetails>> {
        self.repository.libraries.list().await
    }

    /// Get a library by ID with its associated books
    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryDetails> {
        self.repository.libraries.get_by_id(id).await
    }
}
