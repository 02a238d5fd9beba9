//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one algorithm
//! family. Types use serde derives for JSON serialization/deserialization;
//! responses reuse the core step and result types directly.

pub mod catalog;
pub mod common;
pub mod divide_conquer;
pub mod dp;
pub mod graph;
pub mod greedy;
pub mod mst;
pub mod search;
pub mod sorting;
