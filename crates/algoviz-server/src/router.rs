//! Router assembly for the algoviz HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the visualizer front end may be served from any
/// origin). Unknown paths get a structured 404 body.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Metadata
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::meta::health))
        .route("/api/algorithms", get(handlers::meta::catalog))
        // Sorting and search
        .route("/api/algorithms/sorting", post(handlers::sorting::sort))
        .route(
            "/api/algorithms/sorting/{algorithm}",
            post(handlers::sorting::sort_with),
        )
        .route("/api/algorithms/search", post(handlers::search::search))
        // Graphs
        .route("/api/algorithms/graph/bfs", post(handlers::graph::bfs))
        .route("/api/algorithms/graph/dfs", post(handlers::graph::dfs))
        .route("/api/algorithms/mst", post(handlers::mst::mst))
        .route("/api/algorithms/graph/kruskal", post(handlers::mst::kruskal))
        .route("/api/algorithms/graph/prim", post(handlers::mst::prim))
        // Dynamic programming
        .route("/api/algorithms/dp/knapsack", post(handlers::dp::knapsack))
        .route("/api/algorithms/dp/lcs", post(handlers::dp::lcs))
        // Greedy
        .route(
            "/api/algorithms/greedy/coin-change",
            post(handlers::greedy::coin_change),
        )
        .route(
            "/api/algorithms/greedy/activity-selection",
            post(handlers::greedy::activity_selection),
        )
        // Divide and conquer
        .route(
            "/api/algorithms/divide-conquer/merge-sort",
            post(handlers::divide_conquer::merge_sort),
        )
        .fallback(handlers::meta::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
