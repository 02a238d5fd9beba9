//! Request boundary validation.
//!
//! Every engine assumes well-formed input. These checks run first and turn
//! anything malformed into an [`InputError`], so no engine call can fail
//! halfway through a trace.

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::InputError;
use crate::input::{Activity, Edge, Item};

/// Input size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_sort_len: usize,
    pub max_search_len: usize,
    pub max_merge_len: usize,
    pub max_graph_nodes: usize,
    pub max_graph_edges: usize,
    /// Bound on the magnitude of each MST edge weight, so tree totals fit
    /// in `i64`.
    pub max_edge_weight: i64,
    pub max_knapsack_items: usize,
    pub max_knapsack_capacity: i64,
    /// Bound on each item value, so table cells fit in `i64`.
    pub max_item_value: i64,
    pub max_lcs_len: usize,
    pub max_coins: usize,
    pub max_coin_amount: i64,
    pub max_activities: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_sort_len: 50,
            max_search_len: 100,
            max_merge_len: 50,
            max_graph_nodes: 100,
            max_graph_edges: 500,
            max_edge_weight: 1_000_000,
            max_knapsack_items: 50,
            max_knapsack_capacity: 1000,
            max_item_value: 1_000_000,
            max_lcs_len: 100,
            max_coins: 50,
            max_coin_amount: 1_000_000,
            max_activities: 100,
        }
    }
}

/// Parses an algorithm name within a family, listing the accepted names on
/// failure.
pub fn algorithm<A>(family: &'static str, name: &str) -> Result<A, InputError>
where
    A: FromStr + IntoEnumIterator + Display,
{
    name.trim()
        .parse::<A>()
        .map_err(|_| InputError::UnknownAlgorithm {
            family,
            name: name.to_string(),
            expected: A::iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Checks that a list is non-empty and at most `max` long.
pub fn bounded<T>(field: &'static str, values: &[T], max: usize) -> Result<(), InputError> {
    if values.is_empty() {
        return Err(InputError::EmptyInput { field });
    }
    if values.len() > max {
        return Err(InputError::TooLarge {
            field,
            len: values.len(),
            max,
        });
    }
    Ok(())
}

/// Checks the node list (non-empty, unique) and that every edge endpoint
/// names a listed node.
pub fn graph(nodes: &[String], edges: &[Edge], limits: &Limits) -> Result<(), InputError> {
    bounded("nodes", nodes, limits.max_graph_nodes)?;
    if edges.len() > limits.max_graph_edges {
        return Err(InputError::TooLarge {
            field: "edges",
            len: edges.len(),
            max: limits.max_graph_edges,
        });
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.as_str()) {
            return Err(InputError::DuplicateNode { node: node.clone() });
        }
    }

    for edge in edges {
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint.as_str()) {
                return Err(InputError::UnknownNode {
                    node: endpoint.clone(),
                });
            }
        }
    }
    Ok(())
}

pub fn start_node(nodes: &[String], start: &str) -> Result<(), InputError> {
    if nodes.iter().any(|n| n == start) {
        Ok(())
    } else {
        Err(InputError::StartNodeNotFound {
            node: start.to_string(),
        })
    }
}

/// MST input: a valid graph with at least one edge, every edge weighted
/// within `±max_edge_weight`.
pub fn weighted_graph(
    nodes: &[String],
    edges: &[Edge],
    limits: &Limits,
) -> Result<(), InputError> {
    graph(nodes, edges, limits)?;
    if edges.is_empty() {
        return Err(InputError::EmptyInput { field: "edges" });
    }
    for edge in edges {
        let Some(weight) = edge.weight else {
            return Err(InputError::MissingWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        };
        if weight.unsigned_abs() > limits.max_edge_weight.unsigned_abs() {
            return Err(InputError::TooLargeValue {
                field: "weight",
                value: weight,
                max: limits.max_edge_weight,
            });
        }
    }
    Ok(())
}

/// Returns the capacity as a table dimension once it is known to be in
/// range.
pub fn knapsack(capacity: i64, items: &[Item], limits: &Limits) -> Result<usize, InputError> {
    if capacity <= 0 {
        return Err(InputError::NonPositiveCapacity { capacity });
    }
    if capacity > limits.max_knapsack_capacity {
        return Err(InputError::TooLargeValue {
            field: "capacity",
            value: capacity,
            max: limits.max_knapsack_capacity,
        });
    }
    bounded("items", items, limits.max_knapsack_items)?;

    for (index, item) in items.iter().enumerate() {
        for (field, value) in [("weight", item.weight), ("value", item.value)] {
            if value < 0 {
                return Err(InputError::NegativeItemField {
                    index,
                    field,
                    value,
                });
            }
        }
        if item.value > limits.max_item_value {
            return Err(InputError::TooLargeValue {
                field: "value",
                value: item.value,
                max: limits.max_item_value,
            });
        }
    }

    usize::try_from(capacity).map_err(|_| InputError::NonPositiveCapacity { capacity })
}

pub fn lcs(a: &str, b: &str, limits: &Limits) -> Result<(), InputError> {
    for (field, s) in [("a", a), ("b", b)] {
        let chars: Vec<char> = s.chars().collect();
        bounded(field, &chars, limits.max_lcs_len)?;
    }
    Ok(())
}

/// Returns the denominations and amount as unsigned values once every coin
/// is positive and the amount is non-negative.
pub fn coins(coins: &[i64], amount: i64, limits: &Limits) -> Result<(Vec<u64>, u64), InputError> {
    bounded("coins", coins, limits.max_coins)?;
    if amount < 0 {
        return Err(InputError::NegativeAmount { amount });
    }
    if amount > limits.max_coin_amount {
        return Err(InputError::TooLargeValue {
            field: "amount",
            value: amount,
            max: limits.max_coin_amount,
        });
    }

    let denominations = coins
        .iter()
        .map(|&coin| match u64::try_from(coin) {
            Ok(c) if c > 0 => Ok(c),
            _ => Err(InputError::NonPositiveCoin { coin }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let amount = u64::try_from(amount).map_err(|_| InputError::NegativeAmount { amount })?;

    Ok((denominations, amount))
}

pub fn activities(activities: &[Activity], limits: &Limits) -> Result<(), InputError> {
    bounded("activities", activities, limits.max_activities)?;
    for (index, activity) in activities.iter().enumerate() {
        if activity.finish < activity.start {
            return Err(InputError::InvalidInterval {
                index,
                start: activity.start,
                finish: activity.finish,
            });
        }
    }
    Ok(())
}
