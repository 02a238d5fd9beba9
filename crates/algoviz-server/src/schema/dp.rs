//! Dynamic programming request/response types.

use algoviz_core::dp::{KnapsackResult, KnapsackStep, LcsResult, LcsStep};
use algoviz_core::Item;
use serde::Deserialize;

use super::common::RunResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct KnapsackRequest {
    pub capacity: i64,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LcsRequest {
    pub a: String,
    pub b: String,
}

pub type KnapsackResponse = RunResponse<KnapsackStep, KnapsackResult>;
pub type LcsResponse = RunResponse<LcsStep, LcsResult>;
