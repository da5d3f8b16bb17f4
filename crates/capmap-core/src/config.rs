//! Configuration management for capmap.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`CAPMAP__REPORT__` prefix)
//! 2. Config file (`capmap.toml`, `[report]` section)
//! 3. Defaults

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Upper bound on distinct colours in a palette.
pub const MAX_PALETTE_COLORS: usize = 9;

/// Top-level report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Source CSV path.
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Where the HTML report is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Heading shown at the top of the HTML report.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub palette: StylePalette,

    #[serde(default)]
    pub centrality: CentralityConfig,
}

/// Ordered colours and shapes that categories cycle through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StylePalette {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    #[serde(default = "default_shapes")]
    pub shapes: Vec<String>,
}

impl StylePalette {
    /// Colours actually used: at most [`MAX_PALETTE_COLORS`], default when empty.
    pub fn effective_colors(&self) -> Vec<String> {
        if self.colors.is_empty() {
            return default_colors();
        }
        self.colors.iter().take(MAX_PALETTE_COLORS).cloned().collect()
    }

    /// Shapes actually used: default when empty.
    pub fn effective_shapes(&self) -> Vec<String> {
        if self.shapes.is_empty() {
            return default_shapes();
        }
        self.shapes.clone()
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            shapes: default_shapes(),
        }
    }
}

/// Centrality scoring options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CentralityConfig {
    /// Divide degree counts by `n - 1`.
    #[serde(default)]
    pub normalize_degree: bool,
}

fn default_input_path() -> String {
    "data/capabilities.csv".to_string()
}

fn default_output_path() -> String {
    "capability_map.html".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_title() -> String {
    "Business Capability Map".to_string()
}

fn default_colors() -> Vec<String> {
    [
        "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33", "#A65628", "#F781BF",
        "#999999",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_shapes() -> Vec<String> {
    [
        "dot",
        "square",
        "triangle",
        "diamond",
        "star",
        "triangleDown",
        "hexagon",
        "ellipse",
        "box",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            page_size: default_page_size(),
            title: default_title(),
            palette: StylePalette::default(),
            centrality: CentralityConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load from `<file_prefix>.{toml,yaml,json}` (optional) and `CAPMAP__*` env vars.
    ///
    /// A missing `[report]` section yields the defaults.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::with_name(file_prefix).required(false))
            .add_source(
                ::config::Environment::with_prefix("CAPMAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match cfg.get::<ReportConfig>("report") {
            Ok(c) => Ok(c),
            Err(::config::ConfigError::NotFound(_)) => {
                tracing::debug!(file_prefix, "No [report] section, using defaults");
                Ok(ReportConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
