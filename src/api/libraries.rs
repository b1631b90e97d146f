//! Libraries endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::library::LibraryDetails};

/// List all libraries ordered by name ascending
#[utoipa::path(
    get,
    path = "/api/knjiznice",
    tag = "knjiznice",
    responses(
        (status = 200, description = "List of libraries, name ascending", body = Vec<LibraryDetails>)
    )
)]
pub async fn list_libraries(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LibraryDetails>>> {
    let libraries = state.services.libraries.list().await?;
    Ok(Json(libraries))
}

/// Get a library by ID with its associated books
#[utoipa::path(
    get,
    path = "/api/knjiznice/{id}",
    tag = "knjiznice",
    params(("id" = i32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library details", body = LibraryDetails),
        (status = 404, description = "Library not found")
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LibraryDetails>> {
    let library = state.services.libraries.get_by_id(id).await?;
    Ok(Json(library))
}
