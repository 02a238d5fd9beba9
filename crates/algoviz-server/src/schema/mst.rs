//! Minimum spanning tree request/response types.

use algoviz_core::mst::{MstResult, MstStep};
use algoviz_core::Edge;
use serde::Deserialize;

use super::common::RunResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct MstRequest {
    /// `kruskal` or `prim`. Required on `/mst`; ignored on the
    /// per-algorithm routes.
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Prim's start node (defaults to the first node).
    #[serde(default)]
    pub start: Option<String>,
}

pub type MstResponse = RunResponse<MstStep, MstResult>;
