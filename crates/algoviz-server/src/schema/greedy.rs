//! Greedy algorithm request/response types.

use algoviz_core::greedy::{ActivitySelectionResult, ActivityStep, CoinChangeResult, CoinStep};
use algoviz_core::Activity;
use serde::Deserialize;

use super::common::RunResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct CoinChangeRequest {
    #[serde(default)]
    pub coins: Vec<i64>,
    #[serde(default)]
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySelectionRequest {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

pub type CoinChangeResponse = RunResponse<CoinStep, CoinChangeResult>;
pub type ActivitySelectionResponse = RunResponse<ActivityStep, ActivitySelectionResult>;
