//! Sorting handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::sorting::{ArrayRequest, SortingRequest, SortingResponse};
use crate::state::AppState;

/// `POST /api/algorithms/sorting`
pub async fn sort(
    State(state): State<AppState>,
    payload: Result<Json<SortingRequest>, JsonRejection>,
) -> Result<Json<SortingResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.sort(&req.algorithm, &req.array)?;
    Ok(Json(response))
}

/// `POST /api/algorithms/sorting/{algorithm}`
pub async fn sort_with(
    State(state): State<AppState>,
    Path(algorithm): Path<String>,
    payload: Result<Json<ArrayRequest>, JsonRejection>,
) -> Result<Json<SortingResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.sort(&algorithm, &req.array)?;
    Ok(Json(response))
}
