//! Error types for the capmap-graph crate.

use thiserror::Error;

/// Failure to read relationship records. Fatal for a run.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
