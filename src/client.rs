//! Typed HTTP client for the Knjižnica API
//!
//! The consumer side of the service: one method per backend operation,
//! for use by frontends. Read operations fail on non-success statuses;
//! mutations never do, reporting the outcome through [`CallOutcome`] so
//! the caller decides how to present the failure.

use reqwest::{Client, Response, StatusCode};

use crate::models::{
    book::{BookDetails, SaveBookRequest},
    library::LibraryDetails,
};

/// Longest response body relayed verbatim as an error message, measured in
/// characters. Anything longer is assumed to be an HTML error page and
/// replaced by the status reason phrase.
const MAX_ERROR_BODY_LEN: usize = 200;

/// Outcome of a mutating call: a success flag plus an optional error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    pub ok: bool,
    pub error: Option<String>,
}

impl CallOutcome {
    fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            ok: false,
            error: Some(message),
        }
    }
}

fn failure_message(status: StatusCode, body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY_LEN {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        body.to_string()
    }
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:5232`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch all books with their library pairings
    pub async fn list_books(&self) -> reqwest::Result<Vec<BookDetails>> {
        self.http
            .get(self.url("/api/knjige"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch one book by ID
    pub async fn get_book(&self, id: i32) -> reqwest::Result<BookDetails> {
        self.http
            .get(self.url(&format!("/api/knjige/{}", id)))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch all libraries, ordered by name
    pub async fn list_libraries(&self) -> reqwest::Result<Vec<LibraryDetails>> {
        self.http
            .get(self.url("/api/knjiznice"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch one library by ID with its associated books
    pub async fn get_library(&self, id: i32) -> reqwest::Result<LibraryDetails> {
        self.http
            .get(self.url(&format!("/api/knjiznice/{}", id)))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Create a book paired to the given libraries
    pub async fn create_book(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        library_ids: Vec<i32>,
    ) -> reqwest::Result<CallOutcome> {
        let body = SaveBookRequest {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            library_ids: Some(library_ids),
        };
        let resp = self
            .http
            .post(self.url("/api/knjige"))
            .json(&body)
            .send()
            .await?;
        Self::outcome(resp).await
    }

    /// Update a book, replacing its library pairings
    pub async fn update_book(
        &self,
        id: i32,
        title: &str,
        author: &str,
        isbn: &str,
        library_ids: Vec<i32>,
    ) -> reqwest::Result<CallOutcome> {
        let body = SaveBookRequest {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            library_ids: Some(library_ids),
        };
        let resp = self
            .http
            .put(self.url(&format!("/api/knjige/{}", id)))
            .json(&body)
            .send()
            .await?;
        Self::outcome(resp).await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> reqwest::Result<CallOutcome> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/knjige/{}", id)))
            .send()
            .await?;
        Self::outcome(resp).await
    }

    async fn outcome(resp: Response) -> reqwest::Result<CallOutcome> {
        if resp.status().is_success() {
            return Ok(CallOutcome::success());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(CallOutcome::failure(failure_message(status, &body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_is_relayed() {
        let msg = failure_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Naziv je obavezan."}"#,
        );
        assert_eq!(msg, r#"{"error":"Naziv je obavezan."}"#);
    }

    #[test]
    fn test_long_body_falls_back_to_reason_phrase() {
        let body = "<html>".repeat(40);
        assert!(body.len() > MAX_ERROR_BODY_LEN);
        let msg = failure_message(StatusCode::BAD_REQUEST, &body);
        assert_eq!(msg, "Bad Request");
    }

    #[test]
    fn test_body_at_threshold_is_relayed() {
        let body = "x".repeat(MAX_ERROR_BODY_LEN);
        let msg = failure_message(StatusCode::NOT_FOUND, &body);
        assert_eq!(msg, body);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 200 two-byte characters: 400 bytes but exactly at the limit
        let body = "č".repeat(MAX_ERROR_BODY_LEN);
        assert!(body.len() > MAX_ERROR_BODY_LEN);
        let msg = failure_message(StatusCode::BAD_REQUEST, &body);
        assert_eq!(msg, body);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:5232/");
        assert_eq!(client.url("/api/knjige"), "http://localhost:5232/api/knjige");
    }
}
