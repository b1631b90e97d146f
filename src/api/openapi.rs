//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, libraries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Knjižnica API",
        version = "1.0.0",
        description = "Library Catalogue Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetails,
            crate::models::book::BookPairing,
            crate::models::book::SaveBookRequest,
            // Libraries
            crate::models::library::Library,
            crate::models::library::LibraryDetails,
            crate::models::library::LibraryPairing,
            // Health
            health::ServiceInfo,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service banner and health checks"),
        (name = "knjige", description = "Book catalogue management"),
        (name = "knjiznice", description = "Library listings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
