//! Divide-and-conquer handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::divide_conquer::MergeSortResponse;
use crate::schema::sorting::ArrayRequest;
use crate::state::AppState;

/// `POST /api/algorithms/divide-conquer/merge-sort`
pub async fn merge_sort(
    State(state): State<AppState>,
    payload: Result<Json<ArrayRequest>, JsonRejection>,
) -> Result<Json<MergeSortResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.merge_sort(&req.array)?;
    Ok(Json(response))
}
