//! Core domain types for the capability graph.
//!
//! A run reads [`RelationshipRecord`]s from CSV and turns them into
//! [`Node`]s and [`Edge`]s, each node styled by its [`CategoryStyle`].

use serde::{Deserialize, Serialize};

/// Category assigned to nodes whose source rows carry no category.
pub const OTHER_CATEGORY: &str = "Other";

// ── Records ───────────────────────────────────────────────────────

/// One row of the source CSV: `c_name --relation--> sub_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RelationshipRecord {
    /// Value of the `c_name` column.
    pub source_name: String,
    /// Value of the `sub_name` column.
    pub target_name: String,
    pub category: Option<String>,
    pub definition: Option<String>,
    /// Value of the `relation` column, untouched.
    pub relation_label: String,
}

impl RelationshipRecord {
    pub fn new(
        source_name: impl Into<String>,
        target_name: impl Into<String>,
        relation_label: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            target_name: target_name.into(),
            category: None,
            definition: None,
            relation_label: relation_label.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

// ── Nodes ─────────────────────────────────────────────────────────

/// A capability entity in the graph. The id is the entity name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub category: String,
    pub definition: Option<String>,
    /// 1-based group of the node's category; 0 until styles are applied.
    pub group: u32,
    pub color: String,
    pub shape: String,
    pub degree_centrality: f64,
    pub closeness_centrality: f64,
    pub size: f64,
}

impl Node {
    /// A freshly derived node: no style and zero scores.
    pub fn new(id: impl Into<String>, category: impl Into<String>, definition: Option<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            definition,
            group: 0,
            color: String::new(),
            shape: String::new(),
            degree_centrality: 0.0,
            closeness_centrality: 0.0,
            size: 0.0,
        }
    }

    /// Copy a category style onto this node.
    pub fn apply_style(&mut self, style: &CategoryStyle) {
        self.group = style.group;
        self.color = style.color.clone();
        self.shape = style.shape.clone();
    }
}

// ── Edges ─────────────────────────────────────────────────────────

/// A directed, labelled relationship between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

// ── Styles ────────────────────────────────────────────────────────

/// Visual style shared by every node of one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryStyle {
    pub category: String,
    pub group: u32,
    pub color: String,
    pub shape: String,
}
