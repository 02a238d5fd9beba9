//! Minimum spanning tree handlers.
//!
//! `/mst` takes the algorithm from the body; the per-algorithm routes ignore
//! any `algorithm` field.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::mst::{MstRequest, MstResponse};
use crate::state::AppState;

/// `POST /api/algorithms/mst`
pub async fn mst(
    State(state): State<AppState>,
    payload: Result<Json<MstRequest>, JsonRejection>,
) -> Result<Json<MstResponse>, ApiError> {
    let Json(req) = payload?;
    let algorithm = req.algorithm.clone().unwrap_or_default();
    let response = state.service.mst(&algorithm, &req)?;
    Ok(Json(response))
}

/// `POST /api/algorithms/graph/kruskal`
pub async fn kruskal(
    State(state): State<AppState>,
    payload: Result<Json<MstRequest>, JsonRejection>,
) -> Result<Json<MstResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.service.mst("kruskal", &req)?))
}

/// `POST /api/algorithms/graph/prim`
pub async fn prim(
    State(state): State<AppState>,
    payload: Result<Json<MstRequest>, JsonRejection>,
) -> Result<Json<MstResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.service.mst("prim", &req)?))
}
