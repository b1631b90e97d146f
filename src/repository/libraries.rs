//! Libraries repository

use std::collections::HashMap;

use sqlx::{FromRow, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        library::{Library, LibraryDetails, LibraryPairing},
    },
};

/// Flat join row: one pairing plus the book it references
#[derive(FromRow)]
struct PairingBookRow {
    id: i32,
    library_id: i32,
    book_id: i32,
    copy_count: i32,
    book_title: Option<String>,
    book_author: Option<String>,
    book_isbn: Option<String>,
}

impl From<PairingBookRow> for LibraryPairing {
    fn from(row: PairingBookRow) -> Self {
        let book = row.book_title.map(|title| Book {
            id: row.book_id,
            title,
            author: row.book_author.unwrap_or_default(),
            isbn: row.book_isbn.unwrap_or_default(),
        });
        LibraryPairing {
            id: row.id,
            library_id: row.library_id,
            book_id: row.book_id,
            copy_count: row.copy_count,
            book,
        }
    }
}

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all libraries ordered by name, each with its book pairings
    pub async fn list(&self) -> AppResult<Vec<LibraryDetails>> {
        let libraries = sqlx::query_as::<_, Library>(
            "SELECT id, naziv AS name FROM libraries ORDER BY naziv",
        )
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, PairingBookRow>(
            r#"
            SELECT lb.id, lb.library_id, lb.book_id, lb.broj_primjeraka AS copy_count,
                   b.naziv AS book_title, b.autor AS book_author, b.isbn AS book_isbn
            FROM library_books lb
            LEFT JOIN books b ON b.id = lb.book_id
            ORDER BY lb.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_library: HashMap<i32, Vec<LibraryPairing>> = HashMap::new();
        for row in rows {
            by_library.entry(row.library_id).or_default().push(row.into());
        }

        Ok(libraries
            .into_iter()
            .map(|library| LibraryDetails {
                pairings: by_library.remove(&library.id).unwrap_or_default(),
                id: library.id,
                name: library.name,
            })
            .collect())
    }

    /// Get a library by ID with its book pairings
    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryDetails> {
        let library = sqlx::query_as::<_, Library>(
            "SELECT id, naziv AS name FROM libraries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))?;

        let rows = sqlx::query_as::<_, PairingBookRow>(
            r#"
            SELECT lb.id, lb.library_id, lb.book_id, lb.broj_primjeraka AS copy_count,
                   b.naziv AS book_title, b.autor AS book_author, b.isbn AS book_isbn
            FROM library_books lb
            LEFT JOIN books b ON b.id = lb.book_id
            WHERE lb.library_id = $1
            ORDER BY lb.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(LibraryDetails {
            id: library.id,
            name: library.name,
            pairings: rows.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::books::BooksRepository;
    use sqlx::PgPool;

    async fn seed_library(pool: &PgPool, name: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO libraries (naziv) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_is_sorted_by_name_regardless_of_insertion_order(pool: PgPool) {
        let repo = LibrariesRepository::new(pool.clone());
        seed_library(&pool, "Zagreb").await;
        seed_library(&pool, "Split").await;
        seed_library(&pool, "Osijek").await;

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Osijek", "Split", "Zagreb"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_listed_libraries_show_their_paired_books(pool: PgPool) {
        let libraries = LibrariesRepository::new(pool.clone());
        let books = BooksRepository::new(pool.clone());
        let l1 = seed_library(&pool, "Prva").await;
        let l2 = seed_library(&pool, "Druga").await;
        let book = books.create("Dune", "Herbert", "123", &[l1, l2]).await.unwrap();

        for library_id in [l1, l2] {
            let details = libraries.get_by_id(library_id).await.unwrap();
            assert_eq!(details.pairings.len(), 1);
            assert_eq!(details.pairings[0].book_id, book.id);
            assert_eq!(details.pairings[0].copy_count, 1);
            assert_eq!(
                details.pairings[0].book.as_ref().map(|b| b.title.as_str()),
                Some("Dune")
            );
        }

        // The list view carries the same associations as the detail view
        let listed = libraries.list().await.unwrap();
        assert!(listed
            .iter()
            .filter(|l| l.id == l1 || l.id == l2)
            .all(|l| l.pairings.iter().any(|p| p.book_id == book.id)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_missing_library_is_not_found(pool: PgPool) {
        let repo = LibrariesRepository::new(pool);
        let err = repo.get_by_id(9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
