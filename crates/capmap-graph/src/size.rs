//! Visual node size from degree centrality.

use capmap_core::Node;

/// Base size per unit of `degree_centrality + 1`.
pub const SIZE_SCALE: f64 = 5.0;

/// `(degree_centrality + 1) * 5`.
pub fn node_size(degree_centrality: f64) -> f64 {
    (degree_centrality + 1.0) * SIZE_SCALE
}

/// Set `size` on every node from its current degree centrality.
pub fn apply_sizes(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        node.size = node_size(node.degree_centrality);
    }
}
