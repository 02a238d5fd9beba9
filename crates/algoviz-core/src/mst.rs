//! Minimum spanning tree: Kruskal (sorted edges + union-find) and Prim
//! (greedy frontier expansion).
//!
//! MST edges are always treated as undirected and must carry a weight;
//! [`crate::validate`] rejects unweighted edges before either engine runs.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::input::Edge;
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
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

impl MstAlgorithm {
    pub fn complexity(self) -> Complexity {
        match self {
            MstAlgorithm::Kruskal => Complexity::new("O(E log E)", "O(V)"),
            // Every round rescans all crossing edges.
            MstAlgorithm::Prim => Complexity::new("O(V × E)", "O(V + E)"),
        }
    }

    pub fn run(
        self,
        nodes: &[String],
        edges: &[Edge],
        start: Option<&str>,
    ) -> Execution<MstStep, MstResult> {
        match self {
            MstAlgorithm::Kruskal => kruskal(nodes, edges),
            MstAlgorithm::Prim => prim(nodes, edges, start),
        }
    }
}

/// Disjoint-set forest over named nodes with path compression and union by
/// rank. Two nodes are in the same component iff `find` returns the same
/// root for both.
#[derive(Debug, Clone)]
pub struct UnionFind {
    index: IndexMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(nodes: &[String]) -> Self {
        let index: IndexMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        let len = index.len();
        UnionFind {
            index,
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Root of `node`'s component, or `None` for an unknown node.
    pub fn find(&mut self, node: &str) -> Option<&str> {
        let idx = *self.index.get(node)?;
        let root = self.find_index(idx);
        self.index.get_index(root).map(|(name, _)| name.as_str())
    }

    fn find_index(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent != x {
            let root = self.find_index(parent);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merges the components of `a` and `b`. Returns false if they were
    /// already connected (or either node is unknown).
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let root_a = self.find_index(a);
        let root_b = self.find_index(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.index.get(a).copied(), self.index.get(b).copied()) {
            (Some(a), Some(b)) => self.find_index(a) == self.find_index(b),
            _ => false,
        }
    }

    /// Nodes grouped by component. Groups appear in order of their first
    /// member in the node list.
    pub fn components(&mut self) -> Vec<Vec<String>> {
        let mut groups: IndexMap<usize, Vec<String>> = IndexMap::new();
        for idx in 0..self.parent.len() {
            let root = self.find_index(idx);
            if let Some((name, _)) = self.index.get_index(idx) {
                groups.entry(root).or_default().push(name.clone());
            }
        }
        groups.into_values().collect()
    }
}

/// An undirected weighted edge as reported in steps and results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl MstEdge {
    fn from_input(edge: &Edge) -> Self {
        MstEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight.unwrap_or_default(),
        }
    }
}

/// Partial tree state carried by every MST step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Forest {
    pub selected_edges: Vec<MstEdge>,
    pub selected_nodes: Vec<String>,
    pub total_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MstStep {
    /// Prim seeded its tree with the start node.
    Start {
        current: String,
        #[serde(flatten)]
        forest: Forest,
    },
    Consider {
        #[serde(flatten)]
        edge: MstEdge,
        #[serde(flatten)]
        forest: Forest,
    },
    SelectEdge {
        #[serde(flatten)]
        edge: MstEdge,
        #[serde(flatten)]
        forest: Forest,
    },
    Reject {
        #[serde(flatten)]
        edge: MstEdge,
        reason: &'static str,
        #[serde(flatten)]
        forest: Forest,
    },
    Complete {
        #[serde(flatten)]
        forest: Forest,
        components: Vec<Vec<String>>,
    },
}

impl Step for MstStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstResult {
    pub used: Vec<MstEdge>,
    #[serde(rename = "totalWeight")]
    pub total_weight: i64,
}

/// Accumulates the selected edge set and the nodes it touches.
struct TreeBuilder {
    edges: Vec<MstEdge>,
    nodes: IndexSet<String>,
    total: i64,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            edges: Vec::new(),
            nodes: IndexSet::new(),
            total: 0,
        }
    }

    fn add(&mut self, edge: MstEdge) {
        self.nodes.insert(edge.from.clone());
        self.nodes.insert(edge.to.clone());
        self.total += edge.weight;
        self.edges.push(edge);
    }

    fn forest(&self) -> Forest {
        Forest {
            selected_edges: self.edges.clone(),
            selected_nodes: self.nodes.iter().cloned().collect(),
            total_weight: self.total,
        }
    }

    fn into_result(self) -> MstResult {
        MstResult {
            used: self.edges,
            total_weight: self.total,
        }
    }
}

pub fn kruskal(nodes: &[String], edges: &[Edge]) -> Execution<MstStep, MstResult> {
    let mut trace = Trace::new();
    let mut uf = UnionFind::new(nodes);
    let mut tree = TreeBuilder::new();

    // Stable: equal weights keep input order.
    let mut sorted: Vec<MstEdge> = edges.iter().map(MstEdge::from_input).collect();
    sorted.sort_by_key(|e| e.weight);

    for edge in sorted {
        trace.record(MstStep::Consider {
            edge: edge.clone(),
            forest: tree.forest(),
        });

        if uf.union(&edge.from, &edge.to) {
            tree.add(edge.clone());
            trace.record(MstStep::SelectEdge {
                edge,
                forest: tree.forest(),
            });
        } else {
            trace.record(MstStep::Reject {
                edge,
                reason: "creates cycle",
                forest: tree.forest(),
            });
        }
    }

    trace.record(MstStep::Complete {
        forest: tree.forest(),
        components: uf.components(),
    });

    Execution::new(trace, tree.into_result())
}

/// Prim's algorithm with a full frontier scan per round. The first
/// strictly-lighter crossing edge wins, scanning visited nodes in the order
/// they joined the tree and each node's edges in input order.
pub fn prim(nodes: &[String], edges: &[Edge], start: Option<&str>) -> Execution<MstStep, MstResult> {
    let mut trace = Trace::new();
    let mut tree = TreeBuilder::new();

    let mut adjacency: IndexMap<&str, Vec<MstEdge>> =
        nodes.iter().map(|n| (n.as_str(), Vec::new())).collect();
    for edge in edges.iter().map(MstEdge::from_input) {
        if let Some(out) = adjacency.get_mut(edge.from.as_str()) {
            out.push(edge.clone());
        }
        if let Some(back) = adjacency.get_mut(edge.to.as_str()) {
            back.push(MstEdge {
                from: edge.to.clone(),
                to: edge.from.clone(),
                weight: edge.weight,
            });
        }
    }

    let Some(start) = start.or_else(|| nodes.first().map(String::as_str)) else {
        trace.record(MstStep::Complete {
            forest: tree.forest(),
            components: Vec::new(),
        });
        return Execution::new(trace, tree.into_result());
    };

    let mut visited: IndexSet<String> = IndexSet::new();
    visited.insert(start.to_string());
    tree.nodes.insert(start.to_string());

    trace.record(MstStep::Start {
        current: start.to_string(),
        forest: tree.forest(),
    });

    while visited.len() < nodes.len() {
        let mut best: Option<&MstEdge> = None;
        for node in &visited {
            let candidates = adjacency.get(node.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            for edge in candidates {
                if visited.contains(&edge.to) {
                    continue;
                }
                if best.map_or(true, |b| edge.weight < b.weight) {
                    best = Some(edge);
                }
            }
        }

        // Nothing crosses the cut: the rest of the graph is unreachable.
        let Some(edge) = best.cloned() else {
            break;
        };

        trace.record(MstStep::Consider {
            edge: edge.clone(),
            forest: tree.forest(),
        });

        visited.insert(edge.to.clone());
        tree.add(edge.clone());

        trace.record(MstStep::SelectEdge {
            edge,
            forest: tree.forest(),
        });
    }

    let reached: Vec<String> = visited.iter().cloned().collect();
    let mut components = vec![reached];
    components.extend(
        nodes
            .iter()
            .filter(|n| !visited.contains(*n))
            .map(|n| vec![n.clone()]),
    );

    trace.record(MstStep::Complete {
        forest: tree.forest(),
        components,
    });

    Execution::new(trace, tree.into_result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn triangle() -> (Vec<String>, Vec<Edge>) {
        (
            names(&["A", "B", "C"]),
            vec![
                Edge::weighted("A", "B", 1),
                Edge::weighted("B", "C", 2),
                Edge::weighted("A", "C", 3),
            ],
        )
    }

    #[test]
    fn union_by_rank_attaches_lower_rank_root() {
        let nodes = names(&["a", "b", "c"]);
        let mut uf = UnionFind::new(&nodes);

        assert!(uf.union("a", "b"));
        // Equal ranks: b's root goes under a.
        assert_eq!(uf.find("b"), Some("a"));
        assert!(uf.union("c", "b"));
        // c has rank 0, a has rank 1, so c goes under a.
        assert_eq!(uf.find("c"), Some("a"));
        assert!(!uf.union("b", "c"));
        assert!(uf.connected("a", "c"));
        assert_eq!(uf.find("zzz"), None);
    }

    #[test]
    fn components_keep_node_list_order() {
        let nodes = names(&["a", "b", "c", "d"]);
        let mut uf = UnionFind::new(&nodes);
        uf.union("d", "b");
        assert_eq!(
            uf.components(),
            vec![names(&["a"]), names(&["b", "d"]), names(&["c"])]
        );
    }

    #[test]
    fn kruskal_rejects_cycle_edge() {
        let (nodes, edges) = triangle();
        let run = kruskal(&nodes, &edges);

        assert_eq!(run.result.total_weight, 3);
        assert_eq!(
            run.result.used,
            vec![
                MstEdge { from: "A".into(), to: "B".into(), weight: 1 },
                MstEdge { from: "B".into(), to: "C".into(), weight: 2 },
            ]
        );
        assert_eq!(
            run.trace.actions(),
            vec![
                "consider",
                "select_edge",
                "consider",
                "select_edge",
                "consider",
                "reject",
                "complete"
            ]
        );
        match &run.trace.steps()[5] {
            MstStep::Reject { edge, reason, forest } => {
                assert_eq!(edge.weight, 3);
                assert_eq!(*reason, "creates cycle");
                assert_eq!(forest.total_weight, 3);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn kruskal_breaks_weight_ties_by_input_order() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![
            Edge::weighted("A", "C", 5),
            Edge::weighted("A", "B", 5),
            Edge::weighted("B", "C", 5),
        ];
        let run = kruskal(&nodes, &edges);
        let picked: Vec<(&str, &str)> = run
            .result
            .used
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(picked, vec![("A", "C"), ("A", "B")]);
    }

    #[test]
    fn kruskal_on_disconnected_graph_reports_forest() {
        let nodes = names(&["A", "B", "C", "D"]);
        let edges = vec![Edge::weighted("A", "B", 1), Edge::weighted("C", "D", 2)];
        let run = kruskal(&nodes, &edges);
        match run.trace.last().unwrap() {
            MstStep::Complete { components, .. } => assert_eq!(components.len(), 2),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn prim_grows_from_first_node_by_default() {
        let (nodes, edges) = triangle();
        let run = prim(&nodes, &edges, None);

        assert_eq!(run.result.total_weight, 3);
        assert_eq!(
            run.trace.actions(),
            vec!["start", "consider", "select_edge", "consider", "select_edge", "complete"]
        );
        match &run.trace.steps()[0] {
            MstStep::Start { current, .. } => assert_eq!(current, "A"),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn prim_honours_explicit_start() {
        let (nodes, edges) = triangle();
        let run = prim(&nodes, &edges, Some("C"));
        // From C the cheapest crossing edge is C-B (2), then B-A (1).
        let first = &run.result.used[0];
        assert_eq!((first.from.as_str(), first.to.as_str(), first.weight), ("C", "B", 2));
        assert_eq!(run.result.total_weight, 3);
    }

    #[test]
    fn prim_stops_early_when_disconnected() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![Edge::weighted("A", "B", 4)];
        let run = prim(&nodes, &edges, None);
        assert_eq!(run.result.used.len(), 1);
        match run.trace.last().unwrap() {
            MstStep::Complete { components, .. } => {
                assert_eq!(components, &vec![names(&["A", "B"]), names(&["C"])]);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn select_step_serializes_flat() {
        let (nodes, edges) = triangle();
        let run = kruskal(&nodes, &edges);
        let json = serde_json::to_value(&run.trace.steps()[1]).unwrap();
        assert_eq!(json["action"], "select_edge");
        assert_eq!(json["from"], "A");
        assert_eq!(json["weight"], 1);
        assert_eq!(json["total_weight"], 1);
        assert_eq!(json["selected_nodes"], serde_json::json!(["A", "B"]));
    }

    #[test]
    fn prim_breaks_ties_by_tree_join_order() {
        // After A-B joins, A-C and B-D both cross the cut at weight 5.
        // B-D is listed first, but A joined the tree first, so A-C wins.
        let nodes = names(&["A", "B", "C", "D"]);
        let edges = vec![
            Edge::weighted("A", "B", 1),
            Edge::weighted("B", "D", 5),
            Edge::weighted("A", "C", 5),
        ];
        let run = prim(&nodes, &edges, None);
        let selected: Vec<(String, String)> = run
            .trace
            .steps()
            .iter()
            .filter_map(|s| match s {
                MstStep::SelectEdge { edge, .. } => Some((edge.from.clone(), edge.to.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            selected,
            vec![
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
                ("B".to_string(), "D".to_string()),
            ]
        );
    }

    #[test]
    fn prim_breaks_ties_within_a_node_by_edge_order() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![Edge::weighted("A", "C", 2), Edge::weighted("A", "B", 2)];
        let run = prim(&nodes, &edges, None);
        assert_eq!(run.result.used[0].to, "C");
        assert_eq!(run.result.used[1].to, "B");
    }

    #[test]
    fn reruns_are_identical() {
        let nodes = names(&["A", "B", "C", "D", "E"]);
        let edges = vec![
            Edge::weighted("A", "B", 2),
            Edge::weighted("C", "D", 2),
            Edge::weighted("B", "C", 2),
            Edge::weighted("D", "A", 2),
            Edge::weighted("E", "A", 1),
            Edge::weighted("E", "C", 1),
        ];
        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            assert_eq!(
                algorithm.run(&nodes, &edges, None),
                algorithm.run(&nodes, &edges, None)
            );
        }
    }

    proptest! {
        #[test]
        fn kruskal_and_prim_agree_on_connected_graphs(
            weights in prop::collection::vec(1i64..20, 6)
        ) {
            // K4 always connected.
            let nodes = names(&["a", "b", "c", "d"]);
            let pairs = [("a", "b"), ("a", "c"), ("a", "d"), ("b", "c"), ("b", "d"), ("c", "d")];
            let edges: Vec<Edge> = pairs
                .iter()
                .zip(&weights)
                .map(|((u, v), w)| Edge::weighted(*u, *v, *w))
                .collect();

            let k = kruskal(&nodes, &edges);
            let p = prim(&nodes, &edges, None);
            prop_assert_eq!(k.result.used.len(), 3);
            prop_assert_eq!(p.result.used.len(), 3);
            prop_assert_eq!(k.result.total_weight, p.result.total_weight);
        }

        #[test]
        fn union_find_matches_naive_labels(
            unions in prop::collection::vec((0usize..6, 0usize..6), 0..12)
        ) {
            let nodes: Vec<String> = (0..6).map(|i| i.to_string()).collect();
            let mut uf = UnionFind::new(&nodes);
            let mut labels: Vec<usize> = (0..6).collect();

            for (a, b) in unions {
                let merged = uf.union(&nodes[a], &nodes[b]);
                let (la, lb) = (labels[a], labels[b]);
                prop_assert_eq!(merged, la != lb);
                for l in labels.iter_mut() {
                    if *l == lb {
                        *l = la;
                    }
                }
            }

            for a in 0..6 {
                for b in 0..6 {
                    prop_assert_eq!(uf.connected(&nodes[a], &nodes[b]), labels[a] == labels[b]);
                }
            }
        }
    }
}
