//! Node and edge derivation from relationship records.

use std::collections::HashSet;

use capmap_core::{Edge, Node, RelationshipRecord, OTHER_CATEGORY};

/// Derive one node per distinct entity name.
///
/// Candidates are every `c_name` (with its category and definition) in record
/// order, followed by every `sub_name` (no attributes). The first candidate for
/// a name wins; a missing category becomes [`OTHER_CATEGORY`].
pub fn derive_nodes(records: &[RelationshipRecord]) -> Vec<Node> {
    let sources = records
        .iter()
        .map(|r| (&r.source_name, r.category.as_ref(), r.definition.as_ref()));
    let targets = records.iter().map(|r| (&r.target_name, None, None));

    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len() * 2);
    let mut nodes = Vec::new();

    for (name, category, definition) in sources.chain(targets) {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let category = category
            .cloned()
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());
        nodes.push(Node::new(name.clone(), category, definition.cloned()));
    }

    tracing::debug!(nodes = nodes.len(), "Derived nodes");
    nodes
}

/// Derive one directed edge per record, spaces in the label replaced by `_`.
pub fn derive_edges(records: &[RelationshipRecord]) -> Vec<Edge> {
    records
        .iter()
        .map(|r| Edge {
            from: r.source_name.clone(),
            to: r.target_name.clone(),
            label: normalize_label(&r.relation_label),
        })
        .collect()
}

/// Replace every space character with an underscore.
pub fn normalize_label(label: &str) -> String {
    label.replace(' ', "_")
}
