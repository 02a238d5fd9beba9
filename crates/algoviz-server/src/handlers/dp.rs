//! Dynamic programming handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::dp::{KnapsackRequest, KnapsackResponse, LcsRequest, LcsResponse};
use crate::state::AppState;

/// `POST /api/algorithms/dp/knapsack`
pub async fn knapsack(
    State(state): State<AppState>,
    payload: Result<Json<KnapsackRequest>, JsonRejection>,
) -> Result<Json<KnapsackResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.knapsack(&req)?;
    Ok(Json(response))
}

/// `POST /api/algorithms/dp/lcs`
pub async fn lcs(
    State(state): State<AppState>,
    payload: Result<Json<LcsRequest>, JsonRejection>,
) -> Result<Json<LcsResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.lcs(&req)?;
    Ok(Json(response))
}
