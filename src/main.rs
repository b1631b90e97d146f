//! Knjižnica Server - Library Catalogue Management System

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knjiznica_server::{
    api,
    config::{AppConfig, CorsConfig},
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("knjiznica_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Knjižnica Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool. An unreachable store is fatal:
    // log it and abort startup.
    let pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Connected to database");

    // Run migrations
    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        return Err(e.into());
    }

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        // Service banner & health
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health_check))
        // Books
        .route("/api/knjige", get(api::books::list_books))
        .route("/api/knjige", post(api::books::create_book))
        .route("/api/knjige/:id", get(api::books::get_book))
        .route("/api/knjige/:id", put(api::books::update_book))
        .route("/api/knjige/:id", delete(api::books::delete_book))
        // Libraries
        .route("/api/knjiznice", get(api::libraries::list_libraries))
        .route("/api/knjiznice/:id", get(api::libraries::get_library))
        .with_state(state)
        // OpenAPI documentation
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS restricted to the configured origins; permissive when none are set
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
