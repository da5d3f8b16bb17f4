//! Result types for a capability-map run.

use serde::Serialize;

use capmap_core::{Edge, Node};

use crate::style::StyleMap;

/// Fully annotated node and edge tables plus the style mapping behind them.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityMap {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub styles: StyleMap,
    pub stats: GraphStats,
}

/// Counts gathered along the pipeline.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GraphStats {
    /// Records after duplicate removal.
    pub total_records: usize,
    pub duplicate_records: usize,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub category_count: usize,
    /// Arcs whose source and target are the same node.
    pub self_loops: usize,
}
