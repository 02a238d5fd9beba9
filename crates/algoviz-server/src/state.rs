//! Application state shared across handlers.
//!
//! Engine runs are pure and hold no shared mutable data, so the service sits
//! behind a plain `Arc` with no lock.

use std::sync::Arc;

use algoviz_core::Limits;

use crate::service::AlgorithmService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AlgorithmService>,
}

impl AppState {
    pub fn new(limits: Limits) -> Self {
        AppState {
            service: Arc::new(AlgorithmService::new(limits)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Limits::default())
    }
}
