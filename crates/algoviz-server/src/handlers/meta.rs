//! Service metadata: banner, health, and the algorithm catalog.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;

use crate::error::ApiError;
use crate::schema::catalog::{CatalogResponse, HealthResponse, RootResponse};
use crate::state::AppState;

/// `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AlgoViz API is running",
        docs: "/api/algorithms",
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Lists every algorithm with its complexity and route.
///
/// `GET /api/algorithms`
pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(state.service.catalog())
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
