//! Category style assignment.
//!
//! A [`StyleMap`] is built once from the distinct categories of a node list
//! and then handed to everything that needs to colour nodes.

use std::collections::HashMap;

use serde::Serialize;

use capmap_core::{CategoryStyle, Node, StylePalette};

/// Immutable category → (group, colour, shape) mapping for one run.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StyleMap {
    /// Styles in group order (group 1 first).
    styles: Vec<CategoryStyle>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl StyleMap {
    /// Assign groups in first-seen category order over `nodes`.
    ///
    /// Group `g` gets `colors[(g-1) % len]` and `shapes[(g-1) % len]`.
    pub fn from_nodes(nodes: &[Node], palette: &StylePalette) -> Self {
        Self::from_categories(nodes.iter().map(|n| n.category.as_str()), palette)
    }

    pub fn from_categories<'a>(
        categories: impl IntoIterator<Item = &'a str>,
        palette: &StylePalette,
    ) -> Self {
        let colors = palette.effective_colors();
        let shapes = palette.effective_shapes();

        let mut styles: Vec<CategoryStyle> = Vec::new();
        let mut index = HashMap::new();

        for category in categories {
            if index.contains_key(category) {
                continue;
            }
            let slot = styles.len();
            styles.push(CategoryStyle {
                category: category.to_string(),
                group: slot as u32 + 1,
                color: colors[slot % colors.len()].clone(),
                shape: shapes[slot % shapes.len()].clone(),
            });
            index.insert(category.to_string(), slot);
        }

        Self { styles, index }
    }

    /// Style for a category, if it was seen when the map was built.
    pub fn get(&self, category: &str) -> Option<&CategoryStyle> {
        self.index.get(category).map(|&i| &self.styles[i])
    }

    /// Apply styles to every node whose category is known.
    pub fn apply(&self, nodes: &mut [Node]) {
        for node in nodes.iter_mut() {
            if let Some(style) = self.get(&node.category) {
                node.apply_style(style);
            }
        }
    }

    /// Styles in group order.
    pub fn styles(&self) -> &[CategoryStyle] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
