//! Degree and closeness centrality.
//!
//! Closeness uses unweighted BFS over *incoming* arcs: a node's score reflects
//! how close the nodes that can reach it are. With `r` nodes reaching it
//! (itself included), distance sum `s`, and `n` nodes in total:
//!
//! ```text
//! closeness = ((r - 1) / s) * ((r - 1) / (n - 1))
//! ```
//!
//! Undefined values (no reachers, single-node graph) are reported as 0.

use std::collections::VecDeque;

use capmap_core::{CentralityConfig, Node};

use crate::graph::CapabilityGraph;

/// Both centrality scores for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CentralityScores {
    pub degree: f64,
    pub closeness: f64,
}

/// Degree centrality per node index: in + out arc count, optionally
/// divided by `n - 1`.
pub fn degree_centrality(graph: &CapabilityGraph, config: &CentralityConfig) -> Vec<f64> {
    let n = graph.node_count();
    (0..n)
        .map(|i| {
            let degree = graph.degree(i) as f64;
            if !config.normalize_degree {
                degree
            } else if n > 1 {
                degree / (n - 1) as f64
            } else {
                0.0
            }
        })
        .collect()
}

/// Normalized closeness centrality per node index.
pub fn closeness_centrality(graph: &CapabilityGraph) -> Vec<f64> {
    let n = graph.node_count();
    (0..n)
        .map(|i| {
            if n <= 1 {
                return 0.0;
            }
            let (reachable, total_distance) = inward_distances(graph, i);
            if total_distance == 0 {
                return 0.0;
            }
            let others = (reachable - 1) as f64;
            let score = (others / total_distance as f64) * (others / (n - 1) as f64);
            finite_or_zero(score)
        })
        .collect()
}

/// Compute both scores, indexed like the graph.
pub fn compute(graph: &CapabilityGraph, config: &CentralityConfig) -> Vec<CentralityScores> {
    degree_centrality(graph, config)
        .into_iter()
        .zip(closeness_centrality(graph))
        .map(|(degree, closeness)| CentralityScores {
            degree: finite_or_zero(degree),
            closeness,
        })
        .collect()
}

/// Write scores onto the nodes. Nodes unknown to the graph get zeros.
pub fn annotate(graph: &CapabilityGraph, nodes: &mut [Node], config: &CentralityConfig) {
    let scores = compute(graph, config);
    for node in nodes.iter_mut() {
        let score = graph
            .node_index
            .get(&node.id)
            .map(|&i| scores[i])
            .unwrap_or_default();
        node.degree_centrality = score.degree;
        node.closeness_centrality = score.closeness;
    }
}

/// BFS backwards from `target`: (number of nodes reaching it incl. itself,
/// sum of their shortest distances).
fn inward_distances(graph: &CapabilityGraph, target: usize) -> (usize, usize) {
    let mut distance: Vec<Option<usize>> = vec![None; graph.node_count()];
    distance[target] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(target);

    let mut reachable = 0;
    let mut total = 0;

    while let Some(node) = queue.pop_front() {
        let hops = distance[node].unwrap_or(0);
        reachable += 1;
        total += hops;

        for arc in &graph.incoming[node] {
            if distance[arc.node_index].is_none() {
                distance[arc.node_index] = Some(hops + 1);
                queue.push_back(arc.node_index);
            }
        }
    }

    (reachable, total)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
