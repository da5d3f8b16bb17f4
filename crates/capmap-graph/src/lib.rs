//! capmap-graph: Capability graph derivation for capmap.
//!
//! Loads relationship records from CSV, derives unique nodes and labelled
//! edges, styles nodes by category, builds an in-memory directed graph, and
//! scores every node with degree and closeness centrality.

pub mod centrality;
pub mod derive;
pub mod error;
pub mod graph;
pub mod loader;
pub mod size;
pub mod style;
pub mod types;

pub use error::LoadError;
pub use graph::CapabilityGraph;
pub use loader::RecordSet;
pub use style::StyleMap;
pub use types::{CapabilityMap, GraphStats};

use std::io::Read;
use std::path::Path;

use capmap_core::{CentralityConfig, RelationshipRecord, StylePalette};

/// The capability-map pipeline.
#[derive(Debug, Clone, Default)]
pub struct CapabilityMapper {
    palette: StylePalette,
    centrality_config: CentralityConfig,
}

impl CapabilityMapper {
    /// Create a mapper with the default palette and raw degree counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom colour/shape palette.
    pub fn with_palette(mut self, palette: StylePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set centrality options.
    pub fn with_centrality(mut self, config: CentralityConfig) -> Self {
        self.centrality_config = config;
        self
    }

    /// Run the full pipeline on a CSV file.
    pub fn build_from_path(&self, path: impl AsRef<Path>) -> error::Result<CapabilityMap> {
        let set = loader::load_records(path)?;
        Ok(self.build(set))
    }

    /// Run the full pipeline on CSV text from any reader.
    pub fn build_from_reader<R: Read>(&self, source: R) -> error::Result<CapabilityMap> {
        let set = loader::read_records(source)?;
        Ok(self.build(set))
    }

    /// Run the pipeline on in-memory records. Duplicates are removed first.
    pub fn build_from_records(&self, records: Vec<RelationshipRecord>) -> CapabilityMap {
        self.build(RecordSet::from_rows(records))
    }

    /// Orchestrates: derive nodes → assign styles → derive edges → build graph
    /// → score centrality → map sizes.
    pub fn build(&self, set: RecordSet) -> CapabilityMap {
        let mut nodes = derive::derive_nodes(&set.records);

        let styles = StyleMap::from_nodes(&nodes, &self.palette);
        styles.apply(&mut nodes);
        tracing::debug!(categories = styles.len(), "Assigned category styles");

        let edges = derive::derive_edges(&set.records);

        let graph = CapabilityGraph::build(&nodes, &edges);
        centrality::annotate(&graph, &mut nodes, &self.centrality_config);
        size::apply_sizes(&mut nodes);

        let stats = GraphStats {
            total_records: set.len(),
            duplicate_records: set.duplicate_rows,
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
            category_count: styles.len(),
            self_loops: graph.self_loop_count(),
        };

        tracing::info!(
            nodes = stats.total_nodes,
            edges = stats.total_edges,
            categories = stats.category_count,
            "Built capability map"
        );

        CapabilityMap {
            nodes,
            edges,
            styles,
            stats,
        }
    }
}
