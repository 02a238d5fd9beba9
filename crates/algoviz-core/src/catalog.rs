//! Static listing of every algorithm the engines implement, with its
//! complexity annotation.

use serde::Serialize;
use strum::{Display, IntoEnumIterator};

use crate::divide_conquer::MERGE_SORT_COMPLEXITY;
use crate::dp::{KNAPSACK_COMPLEXITY, LCS_COMPLEXITY};
use crate::graph::TraversalAlgorithm;
use crate::greedy::{ACTIVITY_SELECTION_COMPLEXITY, COIN_CHANGE_COMPLEXITY};
use crate::mst::MstAlgorithm;
use crate::search::SearchAlgorithm;
use crate::sorting::SortAlgorithm;
use crate::trace::Complexity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Family {
    Sorting,
    Search,
    Graph,
    Mst,
    DynamicProgramming,
    Greedy,
    DivideAndConquer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub family: Family,
    pub name: &'static str,
    pub complexity: Complexity,
}

impl AlgorithmInfo {
    fn new(family: Family, name: &'static str, complexity: Complexity) -> Self {
        AlgorithmInfo {
            family,
            name,
            complexity,
        }
    }
}

/// Every algorithm, grouped by family in a fixed order.
pub fn algorithms() -> Vec<AlgorithmInfo> {
    let mut out = Vec::new();
    out.extend(
        SortAlgorithm::iter().map(|a| AlgorithmInfo::new(Family::Sorting, a.into(), a.complexity())),
    );
    out.extend(
        SearchAlgorithm::iter().map(|a| AlgorithmInfo::new(Family::Search, a.into(), a.complexity())),
    );
    out.extend(
        TraversalAlgorithm::iter()
            .map(|a| AlgorithmInfo::new(Family::Graph, a.into(), a.complexity())),
    );
    out.extend(
        MstAlgorithm::iter().map(|a| AlgorithmInfo::new(Family::Mst, a.into(), a.complexity())),
    );
    out.push(AlgorithmInfo::new(
        Family::DynamicProgramming,
        "knapsack",
        KNAPSACK_COMPLEXITY,
    ));
    out.push(AlgorithmInfo::new(
        Family::DynamicProgramming,
        "lcs",
        LCS_COMPLEXITY,
    ));
    out.push(AlgorithmInfo::new(
        Family::Greedy,
        "coin-change",
        COIN_CHANGE_COMPLEXITY,
    ));
    out.push(AlgorithmInfo::new(
        Family::Greedy,
        "activity-selection",
        ACTIVITY_SELECTION_COMPLEXITY,
    ));
    out.push(AlgorithmInfo::new(
        Family::DivideAndConquer,
        "merge-sort",
        MERGE_SORT_COMPLEXITY,
    ));
    out
}
