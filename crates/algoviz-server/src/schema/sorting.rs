//! Sorting request/response types.

use algoviz_core::sorting::{SortResult, SortStep};
use serde::Deserialize;

use super::common::RunResponse;

/// Request naming the sort in the body.
#[derive(Debug, Clone, Deserialize)]
pub struct SortingRequest {
    /// One of `bubble`, `selection`, `insertion`, `quick` (any case).
    pub algorithm: String,
    pub array: Vec<i64>,
}

/// Request body for endpoints that take the algorithm from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayRequest {
    #[serde(default)]
    pub array: Vec<i64>,
}

pub type SortingResponse = RunResponse<SortStep, SortResult>;
