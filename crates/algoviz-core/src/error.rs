//! Input error types for algoviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering every
//! way a request can be rejected before an engine runs. Engines themselves
//! never fail; everything here is produced by [`crate::validate`].

use thiserror::Error;

/// Errors produced while validating engine input at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required list or string was empty.
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    /// A list or string exceeded its configured bound.
    #[error("{field} too large ({len} elements, max {max})")]
    TooLarge {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A scalar exceeded its configured bound.
    #[error("{field} too large ({value}, max {max})")]
    TooLargeValue {
        field: &'static str,
        value: i64,
        max: i64,
    },

    /// The algorithm name is not a member of the requested family.
    #[error("algorithm '{name}' not supported for {family} (expected one of: {expected})")]
    UnknownAlgorithm {
        family: &'static str,
        name: String,
        expected: String,
    },

    /// The traversal/MST start node is not in the node list.
    #[error("start node '{node}' not in nodes list")]
    StartNodeNotFound { node: String },

    /// An edge endpoint is not in the node list.
    #[error("edge references unknown node '{node}'")]
    UnknownNode { node: String },

    /// The node list names the same node twice.
    #[error("duplicate node '{node}' in nodes list")]
    DuplicateNode { node: String },

    /// An MST edge carries no weight.
    #[error("edge {from} -> {to} has no weight")]
    MissingWeight { from: String, to: String },

    /// Knapsack capacity must be at least 1.
    #[error("capacity must be positive (got {capacity})")]
    NonPositiveCapacity { capacity: i64 },

    /// Coin-change amount must be zero or more.
    #[error("amount must be non-negative (got {amount})")]
    NegativeAmount { amount: i64 },

    /// Every coin denomination must be at least 1.
    #[error("coin denominations must be positive (got {coin})")]
    NonPositiveCoin { coin: i64 },

    /// An item weight or value was negative.
    #[error("item {index} has negative {field} ({value})")]
    NegativeItemField {
        index: usize,
        field: &'static str,
        value: i64,
    },

    /// An activity finishes before it starts.
    #[error("activity {index} finishes ({finish}) before it starts ({start})")]
    InvalidInterval { index: usize, start: i64, finish: i64 },
}
