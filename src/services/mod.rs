//! Business logic services

pub mod books;
pub mod libraries;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub libraries: libraries::LibrariesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            libraries: libraries::LibrariesService::new(repository),
        }
    }
}
