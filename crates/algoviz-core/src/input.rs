//! Plain input values shared by several engines.
//!
//! These mirror the JSON the client sends: edges accept either
//! `from`/`to` or `u`/`v` endpoints and `weight` or `w`, and default to
//! bidirectional.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A graph edge between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(alias = "u")]
    pub from: String,
    #[serde(alias = "v")]
    pub to: String,
    #[serde(default, alias = "w", skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight: None,
            bidirectional: true,
        }
    }

    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Edge {
            weight: Some(weight),
            ..Edge::new(from, to)
        }
    }

    pub fn directed(mut self) -> Self {
        self.bidirectional = false;
        self
    }
}

/// A knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

impl Item {
    pub fn new(weight: i64, value: i64) -> Self {
        Item { weight, value }
    }
}

/// An activity for interval scheduling.
///
/// Fields other than `start`/`finish` (names, ids, colors) are carried
/// through untouched so the client can label what it sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub start: i64,
    pub finish: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(start: i64, finish: i64) -> Self {
        Activity {
            start,
            finish,
            extra: Map::new(),
        }
    }
}
