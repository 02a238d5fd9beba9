//! Search handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::search::{SearchRequest, SearchResponse};
use crate::state::AppState;

/// `POST /api/algorithms/search`
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) = payload?;
    let response = state.service.search(&req)?;
    Ok(Json(response))
}
