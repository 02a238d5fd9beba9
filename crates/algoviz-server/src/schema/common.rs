//! Common response envelope shared by every algorithm endpoint.

use algoviz_core::{Complexity, Execution, Trace};
use serde::Serialize;

/// Response for one engine run.
///
/// The engine result's fields are flattened into the top level, so a sort
/// response reads `{steps, sorted, comparisons, swaps, complexity}`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse<S: Serialize, R: Serialize> {
    /// The full ordered trace.
    pub steps: Trace<S>,
    #[serde(flatten)]
    pub result: R,
    /// Informational asymptotic cost.
    pub complexity: Complexity,
}

impl<S: Serialize, R: Serialize> RunResponse<S, R> {
    pub fn new(run: Execution<S, R>, complexity: Complexity) -> Self {
        RunResponse {
            steps: run.trace,
            result: run.result,
            complexity,
        }
    }
}
