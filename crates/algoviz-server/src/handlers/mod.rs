//! HTTP handler functions, one module per algorithm family.
//!
//! Handlers are thin: they extract the body, call the matching
//! [`crate::service::AlgorithmService`] method, and wrap the result in
//! `Json`. Malformed bodies surface as [`crate::error::ApiError::BadRequest`].

pub mod divide_conquer;
pub mod dp;
pub mod graph;
pub mod greedy;
pub mod meta;
pub mod mst;
pub mod search;
pub mod sorting;
