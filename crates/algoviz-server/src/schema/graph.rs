//! Graph traversal request/response types.

use algoviz_core::graph::{TraversalResult, TraversalStep};
use algoviz_core::Edge;
use serde::Deserialize;

use super::common::RunResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct GraphRequest {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    pub start: String,
}

pub type TraversalResponse = RunResponse<TraversalStep, TraversalResult>;
