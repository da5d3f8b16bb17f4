//! Error types for the capmap-report crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Load error: {0}")]
    Load(#[from] capmap_graph::LoadError),

    #[error(transparent)]
    Core(#[from] capmap_core::CapmapError),

    #[error("Page {page} out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("Unknown table column: {column}")]
    UnknownColumn { column: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
