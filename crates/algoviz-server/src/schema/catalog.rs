//! Service metadata response types.

use algoviz_core::catalog::AlgorithmInfo;
use serde::Serialize;

/// One catalog entry: the algorithm plus the route that runs it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub info: AlgorithmInfo,
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub algorithms: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub docs: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
