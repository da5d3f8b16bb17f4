//! Node and edge tables in the shape vis-network consumes.

use serde::{Deserialize, Serialize};

use capmap_core::{Edge, Node};

/// Arrow style on every edge.
pub const ARROWS_TO: &str = "to";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    pub group: u32,
    pub color: String,
    pub shape: String,
    pub size: f64,
    /// Hover tooltip.
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub arrows: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkPayload {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl NetworkPayload {
    pub fn new(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.iter().map(NetworkNode::from).collect(),
            edges: edges.iter().map(NetworkEdge::from).collect(),
        }
    }
}

impl From<&Node> for NetworkNode {
    fn from(node: &Node) -> Self {
        let title = match &node.definition {
            Some(def) => format!("{}\n{}", node.category, def),
            None => node.category.clone(),
        };
        Self {
            id: node.id.clone(),
            label: node.id.clone(),
            group: node.group,
            color: node.color.clone(),
            shape: node.shape.clone(),
            size: node.size,
            title,
        }
    }
}

impl From<&Edge> for NetworkEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
            label: edge.label.clone(),
            arrows: ARROWS_TO.to_string(),
        }
    }
}
