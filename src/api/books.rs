//! Books endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDetails, SaveBookRequest},
};

/// Unpack the request body, turning any rejection (empty body, invalid
/// JSON, wrong types) into the same 400 the original backend returned.
fn request_body(
    payload: Result<Json<SaveBookRequest>, JsonRejection>,
) -> AppResult<SaveBookRequest> {
    let Json(data) = payload.map_err(|_| {
        AppError::Constraint("Tijelo zahtjeva je prazno ili nevažeći JSON.".to_string())
    })?;
    Ok(data)
}

/// List all books with their library pairings
#[utoipa::path(
    get,
    path = "/api/knjige",
    tag = "knjige",
    responses(
        (status = 200, description = "List of books", body = Vec<BookDetails>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookDetails>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/knjige/{id}",
    tag = "knjige",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetails>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book paired to the requested libraries
#[utoipa::path(
    post,
    path = "/api/knjige",
    tag = "knjige",
    request_body = SaveBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookDetails),
        (status = 400, description = "Missing title or author", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<SaveBookRequest>, JsonRejection>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<BookDetails>)> {
    let data = request_body(payload)?;
    let book = state.services.books.create(&data).await?;
    let location = format!("/api/knjige/{}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(book),
    ))
}

/// Update a book, replacing its pairing set
#[utoipa::path(
    put,
    path = "/api/knjige/{id}",
    tag = "knjige",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = SaveBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookDetails),
        (status = 400, description = "Missing title or author", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<SaveBookRequest>, JsonRejection>,
) -> AppResult<Json<BookDetails>> {
    let data = request_body(payload)?;
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book together with all its pairings
#[utoipa::path(
    delete,
    path = "/api/knjige/{id}",
    tag = "knjige",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
