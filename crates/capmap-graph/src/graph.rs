//! In-memory directed multigraph over capability nodes.
//!
//! Nodes get a dense index matching their position in the node list; arcs are
//! kept in both an outgoing and an incoming adjacency list so that in-degree
//! and inward distances are as cheap as their outgoing counterparts.

use std::collections::HashMap;

use capmap_core::{Edge, Node};

/// One directed arc in the adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphArc {
    /// Normalized relation label.
    pub label: String,
    /// Index of the node at the other end.
    pub node_index: usize,
}

/// The capability graph. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct CapabilityGraph {
    /// Node ids by dense index.
    pub ids: Vec<String>,
    /// `outgoing[i]` = arcs leaving node `i` (target in `node_index`).
    pub outgoing: Vec<Vec<GraphArc>>,
    /// `incoming[i]` = arcs entering node `i` (source in `node_index`).
    pub incoming: Vec<Vec<GraphArc>>,
    /// Map from node id → dense index.
    pub node_index: HashMap<String, usize>,
}

impl CapabilityGraph {
    /// Build from the derived node and edge tables.
    ///
    /// Parallel arcs and self-loops are kept. Arcs whose endpoints are not in
    /// `nodes` are skipped.
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut node_index = HashMap::with_capacity(nodes.len());
        let mut ids = Vec::with_capacity(nodes.len());

        for node in nodes {
            if node_index.contains_key(&node.id) {
                tracing::warn!(node_id = %node.id, "Duplicate node id ignored");
                continue;
            }
            node_index.insert(node.id.clone(), ids.len());
            ids.push(node.id.clone());
        }

        let mut outgoing = vec![Vec::new(); ids.len()];
        let mut incoming = vec![Vec::new(); ids.len()];

        for edge in edges {
            match (node_index.get(&edge.from), node_index.get(&edge.to)) {
                (Some(&src), Some(&tgt)) => {
                    outgoing[src].push(GraphArc {
                        label: edge.label.clone(),
                        node_index: tgt,
                    });
                    incoming[tgt].push(GraphArc {
                        label: edge.label.clone(),
                        node_index: src,
                    });
                }
                _ => {
                    tracing::warn!(
                        from = %edge.from,
                        to = %edge.to,
                        "Edge references unknown node, skipped"
                    );
                }
            }
        }

        Self {
            ids,
            outgoing,
            incoming,
            node_index,
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of arcs in the graph.
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|arcs| arcs.len()).sum()
    }

    /// In-degree plus out-degree. A self-loop counts twice.
    pub fn degree(&self, index: usize) -> usize {
        self.outgoing[index].len() + self.incoming[index].len()
    }

    /// Arcs that start and end at the same node.
    pub fn self_loop_count(&self) -> usize {
        self.outgoing
            .iter()
            .enumerate()
            .map(|(i, arcs)| arcs.iter().filter(|a| a.node_index == i).count())
            .sum()
    }
}
