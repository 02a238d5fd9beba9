//! Breadth-first and depth-first traversal over a named-node graph.
//!
//! The [`Adjacency`] structure keeps neighbors in edge input order and the
//! visited set keeps insertion order, so a trace depends only on the input
//! lists, never on hashing.

use std::collections::VecDeque;

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
pub enum TraversalAlgorithm {
    Bfs,
    Dfs,
}

impl TraversalAlgorithm {
    pub fn complexity(self) -> Complexity {
        Complexity::new("O(V + E)", "O(V)")
    }

    pub fn run(
        self,
        nodes: &[String],
        edges: &[Edge],
        start: &str,
    ) -> Execution<TraversalStep, TraversalResult> {
        let adjacency = Adjacency::build(nodes, edges);
        match self {
            TraversalAlgorithm::Bfs => bfs(&adjacency, start),
            TraversalAlgorithm::Dfs => dfs(&adjacency, start),
        }
    }
}

/// Node identifier to ordered neighbor list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adjacency {
    lists: IndexMap<String, Vec<String>>,
}

impl Adjacency {
    /// Builds adjacency lists from a node list and an edge list. Each edge
    /// adds `from -> to`, plus `to -> from` unless it is directed.
    pub fn build(nodes: &[String], edges: &[Edge]) -> Self {
        let mut lists: IndexMap<String, Vec<String>> =
            nodes.iter().map(|n| (n.clone(), Vec::new())).collect();

        for edge in edges {
            if let Some(out) = lists.get_mut(&edge.from) {
                out.push(edge.to.clone());
            }
            if edge.bidirectional {
                if let Some(back) = lists.get_mut(&edge.to) {
                    back.push(edge.from.clone());
                }
            }
        }

        Adjacency { lists }
    }

    pub fn neighbors(&self, node: &str) -> &[String] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Pending nodes at the moment a step was recorded. Serializes as a
/// `queue` key for BFS and a `stack` key for DFS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontier {
    Queue(Vec<String>),
    Stack(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TraversalStep {
    Start {
        visiting: String,
        #[serde(flatten)]
        frontier: Frontier,
        visited: Vec<String>,
    },
    Visit {
        visiting: String,
        #[serde(flatten)]
        frontier: Frontier,
        visited: Vec<String>,
    },
    /// BFS discovered a neighbor.
    Enqueue {
        visiting: String,
        neighbor: String,
        #[serde(flatten)]
        frontier: Frontier,
        visited: Vec<String>,
    },
    /// DFS pushed a neighbor.
    Push {
        visiting: String,
        neighbor: String,
        #[serde(flatten)]
        frontier: Frontier,
        visited: Vec<String>,
    },
    Complete {
        #[serde(rename = "traversalOrder")]
        traversal_order: Vec<String>,
        visited: Vec<String>,
    },
}

impl Step for TraversalStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    #[serde(rename = "traversalOrder")]
    pub traversal_order: Vec<String>,
}

fn snapshot(visited: &IndexSet<String>) -> Vec<String> {
    visited.iter().cloned().collect()
}

/// BFS with visited-on-enqueue, so a node never enters the queue twice.
pub fn bfs(adjacency: &Adjacency, start: &str) -> Execution<TraversalStep, TraversalResult> {
    let mut trace = Trace::new();
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());
    let queue_snapshot = |q: &VecDeque<String>| Frontier::Queue(q.iter().cloned().collect());

    trace.record(TraversalStep::Start {
        visiting: start.to_string(),
        frontier: queue_snapshot(&queue),
        visited: snapshot(&visited),
    });

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        trace.record(TraversalStep::Visit {
            visiting: current.clone(),
            frontier: queue_snapshot(&queue),
            visited: snapshot(&visited),
        });

        for neighbor in adjacency.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
                trace.record(TraversalStep::Enqueue {
                    visiting: current.clone(),
                    neighbor: neighbor.clone(),
                    frontier: queue_snapshot(&queue),
                    visited: snapshot(&visited),
                });
            }
        }
    }

    trace.record(TraversalStep::Complete {
        traversal_order: order.clone(),
        visited: snapshot(&visited),
    });

    Execution::new(trace, TraversalResult { traversal_order: order })
}

/// Stack-based DFS with visited-on-pop. A node may sit on the stack more
/// than once; stale entries are skipped when popped. Neighbors are pushed in
/// reverse so the first-listed neighbor is explored first.
pub fn dfs(adjacency: &Adjacency, start: &str) -> Execution<TraversalStep, TraversalResult> {
    let mut trace = Trace::new();
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut stack = vec![start.to_string()];
    let mut order = Vec::new();

    trace.record(TraversalStep::Start {
        visiting: start.to_string(),
        frontier: Frontier::Stack(stack.clone()),
        visited: Vec::new(),
    });

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        order.push(current.clone());

        trace.record(TraversalStep::Visit {
            visiting: current.clone(),
            frontier: Frontier::Stack(stack.clone()),
            visited: snapshot(&visited),
        });

        for neighbor in adjacency.neighbors(&current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
                trace.record(TraversalStep::Push {
                    visiting: current.clone(),
                    neighbor: neighbor.clone(),
                    frontier: Frontier::Stack(stack.clone()),
                    visited: snapshot(&visited),
                });
            }
        }
    }

    trace.record(TraversalStep::Complete {
        traversal_order: order.clone(),
        visited: snapshot(&visited),
    });

    Execution::new(trace, TraversalResult { traversal_order: order })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adjacency_follows_edge_order_and_direction() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![
            Edge::new("A", "C"),
            Edge::new("A", "B"),
            Edge::new("B", "C").directed(),
        ];
        let adj = Adjacency::build(&nodes, &edges);
        assert_eq!(adj.neighbors("A"), &names(&["C", "B"])[..]);
        assert_eq!(adj.neighbors("B"), &names(&["A", "C"])[..]);
        assert_eq!(adj.neighbors("C"), &names(&["A"])[..]);
        assert!(adj.neighbors("Z").is_empty());
    }

    #[test]
    fn bfs_visits_in_level_order() {
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![Edge::new("A", "B"), Edge::new("A", "C")];
        let run = TraversalAlgorithm::Bfs.run(&nodes, &edges, "A");

        assert_eq!(run.result.traversal_order, names(&["A", "B", "C"]));
        assert_eq!(
            run.trace.actions(),
            vec!["start", "visit", "enqueue", "enqueue", "visit", "visit", "complete"]
        );
    }

    #[test]
    fn bfs_never_enqueues_twice() {
        // Diamond: D is reachable through B and C.
        let nodes = names(&["A", "B", "C", "D"]);
        let edges = vec![
            Edge::new("A", "B"),
            Edge::new("A", "C"),
            Edge::new("B", "D"),
            Edge::new("C", "D"),
        ];
        let run = TraversalAlgorithm::Bfs.run(&nodes, &edges, "A");
        let enqueued_d = run
            .trace
            .steps()
            .iter()
            .filter(|s| matches!(s, TraversalStep::Enqueue { neighbor, .. } if neighbor == "D"))
            .count();
        assert_eq!(enqueued_d, 1);
        assert_eq!(run.result.traversal_order, names(&["A", "B", "C", "D"]));
    }

    #[test]
    fn dfs_prefers_first_listed_neighbor() {
        let nodes = names(&["A", "B", "C", "D"]);
        let edges = vec![
            Edge::new("A", "B"),
            Edge::new("A", "C"),
            Edge::new("B", "D"),
        ];
        let run = TraversalAlgorithm::Dfs.run(&nodes, &edges, "A");
        assert_eq!(run.result.traversal_order, names(&["A", "B", "D", "C"]));

        // C is pushed first (reverse order) so B ends on top of the stack.
        match &run.trace.steps()[3] {
            TraversalStep::Push { frontier, .. } => {
                assert_eq!(frontier, &Frontier::Stack(names(&["C", "B"])));
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn dfs_skips_stale_stack_entries() {
        // Triangle: C gets pushed from A and again from B before it is visited.
        let nodes = names(&["A", "B", "C"]);
        let edges = vec![
            Edge::new("A", "B"),
            Edge::new("A", "C"),
            Edge::new("B", "C"),
        ];
        let run = TraversalAlgorithm::Dfs.run(&nodes, &edges, "A");
        assert_eq!(run.result.traversal_order, names(&["A", "B", "C"]));
        let visits = run.trace.actions().iter().filter(|a| **a == "visit").count();
        assert_eq!(visits, 3);
    }

    #[test]
    fn directed_edges_limit_reachability() {
        let nodes = names(&["A", "B"]);
        let edges = vec![Edge::new("B", "A").directed()];
        let run = TraversalAlgorithm::Bfs.run(&nodes, &edges, "A");
        assert_eq!(run.result.traversal_order, names(&["A"]));
    }

    #[test]
    fn frontier_serializes_under_its_own_key() {
        let step = TraversalStep::Start {
            visiting: "A".into(),
            frontier: Frontier::Queue(names(&["A"])),
            visited: names(&["A"]),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "start", "visiting": "A", "queue": ["A"], "visited": ["A"]})
        );
    }

    #[test]
    fn reruns_are_identical() {
        let nodes = names(&["A", "B", "C", "D", "E"]);
        let edges = vec![
            Edge::new("C", "A"),
            Edge::new("A", "B"),
            Edge::new("B", "D"),
            Edge::new("C", "D"),
            Edge::new("D", "E").directed(),
        ];
        for algorithm in [TraversalAlgorithm::Bfs, TraversalAlgorithm::Dfs] {
            assert_eq!(
                algorithm.run(&nodes, &edges, "A"),
                algorithm.run(&nodes, &edges, "A")
            );
        }
    }
}
