//! Search request/response types.

use algoviz_core::search::{SearchResult, SearchStep};
use serde::{Deserialize, Serialize};

use super::common::RunResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// `linear` or `binary`.
    pub algorithm: String,
    pub array: Vec<i64>,
    pub target: i64,
}

/// Search results nest under a `result` key.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub result: SearchResult,
}

pub type SearchResponse = RunResponse<SearchStep, SearchOutcome>;
