//! capmap-report: Presentation layer for capability maps.
//!
//! Turns an annotated [`CapabilityMap`] into the tables an interactive viewer
//! consumes (vis-network nodes/edges, a searchable node table) and renders
//! them into a single self-contained HTML page.

pub mod error;
pub mod fingerprint;
pub mod html;
pub mod network;
pub mod table;

pub use error::ReportError;
pub use network::NetworkPayload;
pub use table::{Column, NodeTable, SortOrder, TablePage};

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use capmap_core::{CategoryStyle, ReportConfig};
use capmap_graph::{CapabilityMap, CapabilityMapper, GraphStats};

/// Presentation-ready view of one capability map.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub network: NetworkPayload,
    pub table: NodeTable,
    pub legend: Vec<CategoryStyle>,
    pub stats: GraphStats,
    pub fingerprint: String,
}

impl Report {
    /// Project a capability map into network and table form.
    pub fn from_map(map: &CapabilityMap, page_size: usize) -> error::Result<Self> {
        let network = NetworkPayload::new(&map.nodes, &map.edges);
        let table = NodeTable::new(&map.nodes, page_size);
        let fingerprint = fingerprint::compute_fingerprint(&network, table.rows())?;

        Ok(Self {
            network,
            table,
            legend: map.styles.styles().to_vec(),
            stats: map.stats.clone(),
            fingerprint,
        })
    }

    /// Render the standalone HTML page.
    pub fn render_html(&self, title: &str) -> error::Result<String> {
        html::render_report(
            &self.network,
            self.table.rows(),
            &self.legend,
            &html::HtmlOptions {
                title,
                page_size: self.table.page_size(),
                fingerprint: &self.fingerprint,
            },
        )
    }

    /// Render and write the HTML page to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>, title: &str) -> error::Result<()> {
        let path = path.as_ref();
        let page = self.render_html(title)?;
        std::fs::write(path, page)?;
        tracing::info!(path = %path.display(), fingerprint = %self.fingerprint, "Report written");
        Ok(())
    }
}

/// Builds reports according to a [`ReportConfig`].
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    mapper: CapabilityMapper,
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        let mapper = CapabilityMapper::new()
            .with_palette(config.palette.clone())
            .with_centrality(config.centrality.clone());
        Self { mapper, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load the configured input file and build the report.
    pub fn generate(&self) -> error::Result<Report> {
        self.generate_from_path(&self.config.input_path)
    }

    pub fn generate_from_path(&self, path: impl AsRef<Path>) -> error::Result<Report> {
        let map = self.mapper.build_from_path(path)?;
        Report::from_map(&map, self.config.page_size)
    }

    pub fn generate_from_reader<R: Read>(&self, source: R) -> error::Result<Report> {
        let map = self.mapper.build_from_reader(source)?;
        Report::from_map(&map, self.config.page_size)
    }
}
