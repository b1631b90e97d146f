//! Service banner and health endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    /// Service banner
    pub message: String,
    /// Available API endpoints
    pub endpoints: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Service banner with the list of API endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner", body = ServiceInfo)
    )
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Knjižnica API".to_string(),
        endpoints: vec!["/api/knjige".to_string(), "/api/knjiznice".to_string()],
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_lists_both_endpoints() {
        let Json(info) = root().await;
        assert_eq!(info.message, "Knjižnica API");
        assert_eq!(info.endpoints, vec!["/api/knjige", "/api/knjiznice"]);
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
