//! Greedy algorithm handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::greedy::{
    ActivitySelectionRequest, ActivitySelectionResponse, CoinChangeRequest, CoinChangeResponse,
};
use crate::state::AppState;

/// `POST /api/algorithms/greedy/coin-change`
pub async fn coin_change(
    State(state): State<AppState>,
    payload: Result<Json<CoinChangeRequest>, JsonRejection>,
) -> Result<Json<CoinChangeResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.coin_change(&req)?;
    Ok(Json(response))
}

/// `POST /api/algorithms/greedy/activity-selection`
pub async fn activity_selection(
    State(state): State<AppState>,
    payload: Result<Json<ActivitySelectionRequest>, JsonRejection>,
) -> Result<Json<ActivitySelectionResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.activity_selection(&req)?;
    Ok(Json(response))
}
