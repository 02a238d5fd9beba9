//! Algorithm service: validation, dispatch, and response assembly.
//!
//! Every operation follows the same path: check the request against
//! [`Limits`] (rejections become [`ApiError::BadRequest`]), run one engine to
//! completion, then wrap its trace and result in the response envelope. The
//! service holds no mutable state, so concurrent requests never interact.

use algoviz_core::catalog::{self, AlgorithmInfo, Family};
use algoviz_core::divide_conquer::{self, MERGE_SORT_COMPLEXITY};
use algoviz_core::dp::{self, KNAPSACK_COMPLEXITY, LCS_COMPLEXITY};
use algoviz_core::graph::TraversalAlgorithm;
use algoviz_core::greedy::{self, ACTIVITY_SELECTION_COMPLEXITY, COIN_CHANGE_COMPLEXITY};
use algoviz_core::mst::MstAlgorithm;
use algoviz_core::search::SearchAlgorithm;
use algoviz_core::sorting::SortAlgorithm;
use algoviz_core::{validate, Complexity, Execution, InputError, Limits, Step};
use serde::Serialize;

use crate::error::ApiError;
use crate::schema::catalog::{CatalogEntry, CatalogResponse};
use crate::schema::common::RunResponse;
use crate::schema::dp::{KnapsackRequest, KnapsackResponse, LcsRequest, LcsResponse};
use crate::schema::graph::{GraphRequest, TraversalResponse};
use crate::schema::greedy::{
    ActivitySelectionRequest, ActivitySelectionResponse, CoinChangeRequest, CoinChangeResponse,
};
use crate::schema::divide_conquer::MergeSortResponse;
use crate::schema::mst::{MstRequest, MstResponse};
use crate::schema::search::{SearchOutcome, SearchRequest, SearchResponse};
use crate::schema::sorting::SortingResponse;

pub struct AlgorithmService {
    limits: Limits,
}

impl AlgorithmService {
    pub fn new(limits: Limits) -> Self {
        AlgorithmService { limits }
    }

    pub fn sort(&self, algorithm: &str, array: &[i64]) -> Result<SortingResponse, ApiError> {
        let algorithm: SortAlgorithm = validate::algorithm("sorting", algorithm).map_err(reject)?;
        validate::bounded("array", array, self.limits.max_sort_len).map_err(reject)?;

        let run = algorithm.run(array);
        Ok(respond(algorithm.into(), run, algorithm.complexity()))
    }

    pub fn search(&self, req: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let algorithm: SearchAlgorithm =
            validate::algorithm("search", &req.algorithm).map_err(reject)?;
        validate::bounded("array", &req.array, self.limits.max_search_len).map_err(reject)?;

        let run = algorithm.run(&req.array, req.target);
        let run = Execution::new(run.trace, SearchOutcome { result: run.result });
        Ok(respond(algorithm.into(), run, algorithm.complexity()))
    }

    pub fn traverse(
        &self,
        algorithm: TraversalAlgorithm,
        req: &GraphRequest,
    ) -> Result<TraversalResponse, ApiError> {
        validate::graph(&req.nodes, &req.edges, &self.limits).map_err(reject)?;
        validate::start_node(&req.nodes, &req.start).map_err(reject)?;

        let run = algorithm.run(&req.nodes, &req.edges, &req.start);
        Ok(respond(algorithm.into(), run, algorithm.complexity()))
    }

    pub fn mst(&self, algorithm: &str, req: &MstRequest) -> Result<MstResponse, ApiError> {
        let algorithm: MstAlgorithm = validate::algorithm("mst", algorithm).map_err(reject)?;
        validate::weighted_graph(&req.nodes, &req.edges, &self.limits).map_err(reject)?;
        if let Some(start) = &req.start {
            validate::start_node(&req.nodes, start).map_err(reject)?;
        }

        let run = algorithm.run(&req.nodes, &req.edges, req.start.as_deref());
        Ok(respond(algorithm.into(), run, algorithm.complexity()))
    }

    pub fn knapsack(&self, req: &KnapsackRequest) -> Result<KnapsackResponse, ApiError> {
        let capacity =
            validate::knapsack(req.capacity, &req.items, &self.limits).map_err(reject)?;

        let run = dp::knapsack(capacity, &req.items);
        Ok(respond("knapsack", run, KNAPSACK_COMPLEXITY))
    }

    pub fn lcs(&self, req: &LcsRequest) -> Result<LcsResponse, ApiError> {
        validate::lcs(&req.a, &req.b, &self.limits).map_err(reject)?;

        let run = dp::lcs(&req.a, &req.b);
        Ok(respond("lcs", run, LCS_COMPLEXITY))
    }

    pub fn coin_change(&self, req: &CoinChangeRequest) -> Result<CoinChangeResponse, ApiError> {
        let (coins, amount) =
            validate::coins(&req.coins, req.amount, &self.limits).map_err(reject)?;

        let run = greedy::coin_change(&coins, amount);
        Ok(respond("coin-change", run, COIN_CHANGE_COMPLEXITY))
    }

    pub fn activity_selection(
        &self,
        req: &ActivitySelectionRequest,
    ) -> Result<ActivitySelectionResponse, ApiError> {
        validate::activities(&req.activities, &self.limits).map_err(reject)?;

        let run = greedy::activity_selection(&req.activities);
        Ok(respond("activity-selection", run, ACTIVITY_SELECTION_COMPLEXITY))
    }

    pub fn merge_sort(&self, array: &[i64]) -> Result<MergeSortResponse, ApiError> {
        validate::bounded("array", array, self.limits.max_merge_len).map_err(reject)?;

        let run = divide_conquer::merge_sort(array);
        Ok(respond("merge-sort", run, MERGE_SORT_COMPLEXITY))
    }

    pub fn catalog(&self) -> CatalogResponse {
        let algorithms = catalog::algorithms()
            .into_iter()
            .map(|info| CatalogEntry {
                endpoint: endpoint(&info),
                info,
            })
            .collect();
        CatalogResponse { algorithms }
    }
}

/// The route that runs a catalog entry directly.
fn endpoint(info: &AlgorithmInfo) -> String {
    match info.family {
        Family::Sorting => format!("/api/algorithms/sorting/{}", info.name),
        Family::Search => "/api/algorithms/search".to_string(),
        Family::Graph | Family::Mst => format!("/api/algorithms/graph/{}", info.name),
        Family::DynamicProgramming => format!("/api/algorithms/dp/{}", info.name),
        Family::Greedy => format!("/api/algorithms/greedy/{}", info.name),
        Family::DivideAndConquer => format!("/api/algorithms/divide-conquer/{}", info.name),
    }
}

fn respond<S, R>(algorithm: &str, run: Execution<S, R>, complexity: Complexity) -> RunResponse<S, R>
where
    S: Step + Serialize,
    R: Serialize,
{
    tracing::debug!(
        algorithm,
        steps = run.trace.len(),
        complete = run.trace.is_complete(),
        "engine run finished"
    );
    RunResponse::new(run, complexity)
}

fn reject(err: InputError) -> ApiError {
    tracing::warn!(error = %err, "rejected algorithm input");
    ApiError::from(err)
}
