//! Graph traversal handlers.

use algoviz_core::graph::TraversalAlgorithm;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::graph::{GraphRequest, TraversalResponse};
use crate::state::AppState;

/// `POST /api/algorithms/graph/bfs`
pub async fn bfs(
    State(state): State<AppState>,
    payload: Result<Json<GraphRequest>, JsonRejection>,
) -> Result<Json<TraversalResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.traverse(TraversalAlgorithm::Bfs, &req)?;
    Ok(Json(response))
}

/// `POST /api/algorithms/graph/dfs`
pub async fn dfs(
    State(state): State<AppState>,
    payload: Result<Json<GraphRequest>, JsonRejection>,
) -> Result<Json<TraversalResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.traverse(TraversalAlgorithm::Dfs, &req)?;
    Ok(Json(response))
}
