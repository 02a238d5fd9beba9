//! Linear and binary search.
//!
//! Linear search is exhaustive: it never stops at the first match and
//! reports every matching index in scan order. Binary search sorts its
//! input first and stops at the first probe that hits the target.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::trace::{Complexity, Execution, Step, Trace};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub fn complexity(self) -> Complexity {
        match self {
            SearchAlgorithm::Linear => Complexity::new("O(n)", "O(1)"),
            SearchAlgorithm::Binary => Complexity::new("O(log n)", "O(1)"),
        }
    }

    pub fn run(self, input: &[i64], target: i64) -> Execution<SearchStep, SearchResult> {
        match self {
            SearchAlgorithm::Linear => linear_search(input, target),
            SearchAlgorithm::Binary => binary_search(input, target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchStep {
    /// Linear scan looked at one element.
    Check {
        index: usize,
        value: i64,
        found: bool,
        checking: bool,
    },
    /// Binary search probed the midpoint of `[left, right]`.
    Probe {
        index: usize,
        value: i64,
        left: usize,
        right: usize,
        comparing: bool,
    },
    /// Binary search hit the target.
    Found { index: usize, value: i64, found: bool },
    Complete {
        found: bool,
        indices: Vec<usize>,
        #[serde(rename = "final")]
        is_final: bool,
    },
}

impl Step for SearchStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Linear {
        found: bool,
        indices: Vec<usize>,
    },
    Binary {
        found: bool,
        /// Position in `sorted`, -1 when absent.
        index: i64,
        sorted: Vec<i64>,
    },
}

impl SearchResult {
    pub fn found(&self) -> bool {
        match self {
            SearchResult::Linear { found, .. } | SearchResult::Binary { found, .. } => *found,
        }
    }
}

pub fn linear_search(input: &[i64], target: i64) -> Execution<SearchStep, SearchResult> {
    let mut trace = Trace::new();
    let mut indices = Vec::new();

    for (index, &value) in input.iter().enumerate() {
        let found = value == target;
        if found {
            indices.push(index);
        }
        trace.record(SearchStep::Check {
            index,
            value,
            found,
            checking: true,
        });
    }

    let found = !indices.is_empty();
    trace.record(SearchStep::Complete {
        found,
        indices: indices.clone(),
        is_final: true,
    });

    Execution::new(trace, SearchResult::Linear { found, indices })
}

pub fn binary_search(input: &[i64], target: i64) -> Execution<SearchStep, SearchResult> {
    let mut trace = Trace::new();
    let mut sorted = input.to_vec();
    sorted.sort();

    // Half-open window [left, right) so the bounds never go negative; steps
    // report the inclusive right bound.
    let mut left = 0;
    let mut right = sorted.len();
    let mut hit = None;

    while left < right {
        let mid = (left + right - 1) / 2;
        let value = sorted[mid];
        trace.record(SearchStep::Probe {
            index: mid,
            value,
            left,
            right: right - 1,
            comparing: true,
        });

        if value == target {
            trace.record(SearchStep::Found {
                index: mid,
                value,
                found: true,
            });
            hit = Some(mid);
            break;
        } else if value < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    let found = hit.is_some();
    trace.record(SearchStep::Complete {
        found,
        indices: hit.into_iter().collect(),
        is_final: true,
    });

    let index = hit.map_or(-1, |i| i as i64);
    Execution::new(trace, SearchResult::Binary { found, index, sorted })
}
