//! Books repository
//!
//! Owns the book rows and the pairing rows linking them to libraries.
//! Association rewrites are delete-then-reinsert and run inside a single
//! transaction, so a failed write never leaves a book half-paired.

use std::collections::HashMap;

use sqlx::{FromRow, PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookDetails, BookPairing},
        library::Library,
    },
};

/// Flat join row: one pairing plus the name of its library
#[derive(FromRow)]
struct PairingLibraryRow {
    id: i32,
    library_id: i32,
    book_id: i32,
    library_name: Option<String>,
}

impl From<PairingLibraryRow> for BookPairing {
    fn from(row: PairingLibraryRow) -> Self {
        BookPairing {
            id: row.id,
            library_id: row.library_id,
            book_id: row.book_id,
            library: row.library_name.map(|name| Library {
                id: row.library_id,
                name,
            }),
        }
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch one book with its pairings on the given connection. Used both
    /// for plain reads and for the read-back inside a write transaction.
    async fn fetch_details(conn: &mut PgConnection, id: i32) -> AppResult<BookDetails> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, naziv AS title, autor AS author, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        let rows = sqlx::query_as::<_, PairingLibraryRow>(
            r#"
            SELECT lb.id, lb.library_id, lb.book_id, l.naziv AS library_name
            FROM library_books lb
            LEFT JOIN libraries l ON l.id = lb.library_id
            WHERE lb.book_id = $1
            ORDER BY lb.id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(BookDetails {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            pairings: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// List all books with their library pairings
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, naziv AS title, autor AS author, isbn FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, PairingLibraryRow>(
            r#"
            SELECT lb.id, lb.library_id, lb.book_id, l.naziv AS library_name
            FROM library_books lb
            LEFT JOIN libraries l ON l.id = lb.library_id
            ORDER BY lb.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_book: HashMap<i32, Vec<BookPairing>> = HashMap::new();
        for row in rows {
            by_book.entry(row.book_id).or_default().push(row.into());
        }

        Ok(books
            .into_iter()
            .map(|book| BookDetails {
                pairings: by_book.remove(&book.id).unwrap_or_default(),
                id: book.id,
                title: book.title,
                author: book.author,
                isbn: book.isbn,
            })
            .collect())
    }

    /// Get a book by ID with its library pairings
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookDetails> {
        let mut conn = self.pool.acquire().await?;
        Self::fetch_details(&mut conn, id).await
    }

    /// Create a book and one pairing per library id, atomically.
    ///
    /// `library_ids` must already be deduplicated; a duplicate would trip
    /// the unique index on (library_id, book_id) and roll everything back.
    /// The returned details are read back inside the same transaction.
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        library_ids: &[i32],
    ) -> AppResult<BookDetails> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO books (naziv, autor, isbn) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(title)
        .bind(author)
        .bind(isbn)
        .fetch_one(&mut *tx)
        .await?;

        for &library_id in library_ids {
            sqlx::query(
                "INSERT INTO library_books (library_id, book_id, broj_primjeraka) VALUES ($1, $2, 1)",
            )
            .bind(library_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let book = Self::fetch_details(&mut tx, id).await?;
        tx.commit().await?;
        Ok(book)
    }

    /// Overwrite a book's scalar fields and replace its pairing set, atomically.
    ///
    /// All existing pairings are dropped and recreated with a copy count of 1,
    /// so any customized counts do not survive an update.
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        author: &str,
        isbn: &str,
        library_ids: &[i32],
    ) -> AppResult<BookDetails> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE books SET naziv = $1, autor = $2, isbn = $3 WHERE id = $4")
            .bind(title)
            .bind(author)
            .bind(isbn)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        sqlx::query("DELETE FROM library_books WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for &library_id in library_ids {
            sqlx::query(
                "INSERT INTO library_books (library_id, book_id, broj_primjeraka) VALUES ($1, $2, 1)",
            )
            .bind(library_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let book = Self::fetch_details(&mut tx, id).await?;
        tx.commit().await?;
        Ok(book)
    }

    /// Delete a book together with all its pairings
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM library_books WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
